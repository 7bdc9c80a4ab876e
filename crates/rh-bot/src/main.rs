//! Discord slash-command frontend for the Road Hogs character generator.
//!
//! Registers a single `/palladium` command. Each invocation generates a
//! fresh character sheet from OS entropy and replies in-channel; there is
//! no shared mutable state between invocations.

mod commands;
mod config;

use poise::serenity_prelude as serenity;
use tracing_subscriber::EnvFilter;

use crate::config::BotConfig;

/// Shared data available to every command invocation.
struct Data {}

type Error = Box<dyn std::error::Error + Send + Sync>;
type Context<'a> = poise::Context<'a, Data, Error>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = BotConfig::from_env()?;
    let guild_id = config.guild_id;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![commands::palladium()],
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                // Guild sync is fastest for dev; global sync can take a
                // while to show up.
                match guild_id {
                    Some(id) => {
                        poise::builtins::register_in_guild(
                            ctx,
                            &framework.options().commands,
                            serenity::GuildId::new(id),
                        )
                        .await?;
                        tracing::info!(guild = id, "registered commands in guild");
                    }
                    None => {
                        poise::builtins::register_globally(ctx, &framework.options().commands)
                            .await?;
                        tracing::info!("registered commands globally (may take a while to appear)");
                    }
                }
                tracing::info!(user = %ready.user.name, "logged in");
                Ok(Data {})
            })
        })
        .build();

    let intents = serenity::GatewayIntents::non_privileged();
    let mut client = serenity::ClientBuilder::new(config.token, intents)
        .framework(framework)
        .await?;
    client.start().await?;
    Ok(())
}
