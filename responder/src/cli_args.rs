use argh::FromArgs;
use std::path::PathBuf;

#[derive(Debug, FromArgs)]
#[argh(description = "static-table authoritative DNS responder over UDP")]
pub struct CliArgs {
    #[argh(
        option,
        description = "config file path, the compiled-in record table is used when omitted"
    )]
    pub config: Option<PathBuf>,

    #[argh(option, description = "UDP port to bind, overrides the config file")]
    pub port: Option<u16>,
}
