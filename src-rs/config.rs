use std::env;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(raw) = env::var("PORT") {
            if let Ok(port) = raw.parse::<u16>() {
                cfg.port = port;
            }
        }
        cfg
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}
