use crate::commands::{BoundingBoxCmd, CliError, FitCmd};
use log::{debug, warn};
use svgpath::algorithms::aabb::bounding_box;
use svgpath::algorithms::fit::{fit_path, FitStyle};
use svgpath::path::PathSerializer;

pub fn parse_style(name: &str) -> Result<FitStyle, CliError> {
    Ok(match name {
        "stretch" => FitStyle::Stretch,
        "min" => FitStyle::Min,
        "max" => FitStyle::Max,
        "horizontal" => FitStyle::Horizontal,
        "vertical" => FitStyle::Vertical,
        _ => {
            return Err(CliError::InvalidArgument(format!(
                "unknown fit style {:?}",
                name
            )));
        }
    })
}

pub fn bbox(mut cmd: BoundingBoxCmd) -> Result<(), CliError> {
    if cmd.path.is_empty() {
        warn!("empty path");
    }

    let aabb = bounding_box(cmd.path.events());
    writeln!(&mut *cmd.output, "min: {} {}", aabb.min.x, aabb.min.y)?;
    writeln!(&mut *cmd.output, "max: {} {}", aabb.max.x, aabb.max.y)?;

    Ok(())
}

pub fn fit(mut cmd: FitCmd) -> Result<(), CliError> {
    debug!("fitting into {:?} with {:?}", cmd.rect, cmd.style);

    let fitted = fit_path(&cmd.path, &cmd.rect, cmd.style);
    let data = PathSerializer::with_options(cmd.serializer).serialize(&fitted);
    writeln!(&mut *cmd.output, "{}", data)?;

    Ok(())
}

#[test]
fn fit_styles() {
    assert_eq!(parse_style("min").unwrap(), FitStyle::Min);
    assert_eq!(parse_style("vertical").unwrap(), FitStyle::Vertical);
    assert!(parse_style("diagonal").is_err());
}
