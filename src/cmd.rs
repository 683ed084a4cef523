use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(
    name = "pinbump",
    about = "Bump or pin dependencies in a Package.resolved file"
)]
pub struct Command {
    #[structopt(
        long = "resolved-path",
        help = "path to the Package.resolved file"
    )]
    pub resolved_path: Option<String>,

    #[structopt(subcommand)]
    pub sub_cmd: SubCommand,
}

#[derive(StructOpt)]
pub enum SubCommand {
    #[structopt(name = "show", about = "Show the resolution state of a pin")]
    Show {
        #[structopt(name = "package")]
        name: String,
    },

    #[structopt(name = "count", about = "Show the number of pins in the file")]
    Count {},

    #[structopt(
        name = "update",
        about = "Set the resolution state of a pin and save the file"
    )]
    Update {
        #[structopt(name = "package")]
        name: String,

        #[structopt(long = "branch", help = "new branch name (omit for null)")]
        branch: Option<String>,

        #[structopt(long = "revision", help = "new revision (omit for null)")]
        revision: Option<String>,

        #[structopt(long = "version", help = "new version (omit for null)")]
        version: Option<String>,
    },
}
