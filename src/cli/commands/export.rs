use crate::cli::commands::{open_service, parse_location};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        when,
        loc,
        force,
    } = cmd
    {
        let location = loc.as_deref().map(parse_location).transpose()?;
        let path = expand_tilde(file);

        let service = open_service(cfg).await?;
        let n = ExportLogic::export(&service, *format, &path, *when, location, *force).await?;

        success(format!(
            "Exported {} appointment(s) as {} to {}",
            n,
            format.as_str(),
            path.display()
        ));
    }

    Ok(())
}
