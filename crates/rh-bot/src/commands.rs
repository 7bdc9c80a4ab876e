//! Slash commands.

use rh_generator::{GenResult, Generator, render_sheet};

use crate::{Context, Error};

/// Generate Palladium-style attributes, animal type, and mutant background.
#[poise::command(slash_command)]
pub async fn palladium(
    ctx: Context<'_>,
    #[description = "Optional character name to include at the top"] name: Option<String>,
) -> Result<(), Error> {
    let reply = match sheet_text(name.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(error = %e, "character generation failed");
            format!("Character generation failed: {e}")
        }
    };

    // Stays well under Discord's 2000-character message limit.
    ctx.say(reply).await?;
    Ok(())
}

/// Roll a fresh sheet and render it.
fn sheet_text(name: Option<&str>) -> GenResult<String> {
    let mut generator = Generator::new();
    let sheet = generator.generate(name)?;
    render_sheet(&sheet)
}

#[cfg(test)]
mod tests {
    use super::sheet_text;

    #[test]
    fn sheet_text_renders_a_full_sheet() {
        let text = sheet_text(Some("Testy")).unwrap();
        assert!(text.starts_with("**Testy**"));
        assert!(text.contains("**Attributes**"));
        assert!(text.contains("IQ:"));
        assert!(text.contains("**Animal Type**"));
        assert!(text.contains("**Mutant Background**"));
        assert!(text.len() < 2000);
    }

    #[test]
    fn sheet_text_without_name() {
        let text = sheet_text(None).unwrap();
        assert!(text.starts_with("**Attributes**"));
    }
}
