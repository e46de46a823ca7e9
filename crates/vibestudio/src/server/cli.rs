use crate::ollama::ModelArgs;

#[derive(Debug, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "VIBESTUDIO_PORT", default_value = "8000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "VIBESTUDIO_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[clap(flatten)]
    pub model: ModelArgs,
}
