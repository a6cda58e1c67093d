use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::describe_location;

pub fn handle() -> AppResult<()> {
    header("Sites");
    for loc in crate::models::location::Location::ALL {
        let (label, colour) = describe_location(loc);
        println!(
            "{:>6}  {:<16} {}",
            loc.site_code(),
            loc.name(),
            colour.paint(label)
        );
    }
    Ok(())
}
