use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "validator",
    version,
    about = "External certificate validator",
    long_about = "Reads a PEM certificate from stdin and runs the requested \
                  validation modules against it. The exit code carries the verdict."
)]
pub struct Cli {
    #[arg(long, help = "Output machine-readable JSON listings")]
    pub json: bool,
    #[arg(help = "Certificate type to validate (currently only 'x509')")]
    pub certificate_type: Option<String>,
    #[arg(
        allow_hyphen_values = true,
        trailing_var_arg = true,
        help = "Module specifications of the form {+|-}<module>=<field>[,<field>...]"
    )]
    pub specs: Vec<String>,
}
