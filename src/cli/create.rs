//! Create command implementation

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

use termhere::builder::HelperBuilder;
use termhere::config::Config;
use termhere::tools::SystemRunner;
use termhere::HelperForm;

pub struct CreateOptions {
    pub source: PathBuf,
    pub name: Option<String>,
    pub dest: Option<PathBuf>,
    pub json: bool,
    pub dry_run: bool,
    pub no_reveal: bool,
}

/// Fill a form the same way the window would
fn build_form(config: &Config, options: &CreateOptions) -> Result<HelperForm> {
    let source = std::path::absolute(&options.source)
        .with_context(|| format!("Invalid source path: {}", options.source.display()))?;
    let destination = match &options.dest {
        Some(dest) => std::path::absolute(dest)
            .with_context(|| format!("Invalid destination path: {}", dest.display()))?,
        None => config.initial_destination(),
    };

    let mut form = HelperForm::new(destination);
    form.name = options.name.clone().unwrap_or_default();
    form.pick_source(source, &config.helper.name_prefix);
    Ok(form)
}

/// Create a helper headless and print the status text or JSON report
pub fn create_command(config_path: Option<&Path>, options: CreateOptions) -> Result<()> {
    let mut config = super::load_config(config_path)?;
    if options.no_reveal {
        config.settings.reveal_after_create = false;
    }

    let form = build_form(&config, &options)?;
    let builder = HelperBuilder::new(&config, &SystemRunner);

    if options.dry_run {
        let plan = match builder.dry_run(&form) {
            Ok(plan) => plan,
            Err(e) => bail!("{}", e),
        };
        if options.json {
            let steps: Vec<String> = plan.describe().lines().map(str::to_string).collect();
            let out = serde_json::json!({ "request": plan.request, "steps": steps });
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            println!("{}", plan.describe());
        }
        return Ok(());
    }

    match builder.create(&form) {
        Ok(report) => {
            if options.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.status_text());
            }
            Ok(())
        }
        Err(e) => {
            if options.json {
                let out = serde_json::json!({ "stage": e.stage(), "error": e.to_string() });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                eprintln!("{}", e);
            }
            bail!("Create failed while {}", e.stage())
        }
    }
}
