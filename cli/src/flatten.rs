use crate::commands::{CliError, FlattenCmd, ParseCmd};
use log::debug;
use svgpath::path::{Command, PathSerializer};

pub fn parse(mut cmd: ParseCmd) -> Result<(), CliError> {
    if cmd.count {
        let mut subpaths = 0;
        let mut arcs = 0;
        for command in &cmd.path {
            match command {
                Command::MoveTo(..) => subpaths += 1,
                Command::Arc(..) => arcs += 1,
                _ => {}
            }
        }

        writeln!(&mut *cmd.output, "commands: {}", cmd.path.len())?;
        writeln!(&mut *cmd.output, "subpaths: {}", subpaths)?;
        writeln!(&mut *cmd.output, "arcs: {}", arcs)?;

        return Ok(());
    }

    for (idx, command) in cmd.path.iter().enumerate() {
        writeln!(&mut *cmd.output, "{:4} {:?}", idx, command)?;
    }

    Ok(())
}

pub fn flatten(mut cmd: FlattenCmd) -> Result<(), CliError> {
    let flattened = cmd.path.with_flattened_arcs();
    debug!(
        "flattened {} commands into {}",
        cmd.path.len(),
        flattened.len()
    );

    let data = PathSerializer::with_options(cmd.serializer).serialize(&flattened);
    writeln!(&mut *cmd.output, "{}", data)?;

    Ok(())
}
