use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct TelarConfig {
    pub template_dir: PathBuf,
    pub listen_addr: String,
}

impl TelarConfig {
    pub fn from_env() -> Self {
        // the defaults reproduce the zero-configuration setup: templates in
        // ./template, server on localhost:8080
        let template_dir = PathBuf::from(
            std::env::var("TEMPLATE_DIR").unwrap_or_else(|_| "./template".to_string()),
        );

        let listen_addr =
            std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "localhost:8080".to_string());

        Self {
            template_dir,
            listen_addr,
        }
    }
}
