use std::io::Write;

use anyhow::Result;
use smartrx_core::profile::{ProfessionalProfile, ProfileRepository};

pub async fn list(repository: &dyn ProfileRepository, json: bool, out: &mut impl Write) -> Result<()> {
    let mut profiles = repository.list().await?;
    profiles.sort_by(|a, b| a.name.cmp(&b.name));

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&profiles)?)?;
        return Ok(());
    }

    if profiles.is_empty() {
        writeln!(out, "No profiles loaded (use --file <profiles.json>)")?;
        return Ok(());
    }

    for profile in &profiles {
        write_summary(out, profile)?;
    }
    Ok(())
}

/// Prints one profile. An unknown id is an error.
pub async fn show(
    repository: &dyn ProfileRepository,
    id: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let profile = repository.require(id).await?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&profile)?)?;
        return Ok(());
    }

    write_summary(out, &profile)?;
    if let Some(url) = &profile.profile_image_url {
        writeln!(out, "    image: {}", url)?;
    }
    writeln!(out, "    updated: {}", profile.last_updated.to_rfc3339())?;
    Ok(())
}

fn write_summary(out: &mut impl Write, profile: &ProfessionalProfile) -> Result<()> {
    writeln!(out, "{}  {}", profile.id, profile.name)?;
    if !profile.title.is_empty() || !profile.specialty.is_empty() {
        writeln!(out, "    {} / {}", profile.title, profile.specialty)?;
    }
    if !profile.organization.is_empty() || !profile.location.is_empty() {
        writeln!(out, "    {} - {}", profile.organization, profile.location)?;
    }
    Ok(())
}
