use std::{env};
use log::LevelFilter;

const DEFAULT_PORT: u16 = 3000;

pub fn get_port() -> u16 {
    match env::var("PORT") {
        Ok(val) =>
            match val.parse::<u16>() {
                Ok(p) => p,
                Err(_) => DEFAULT_PORT
            }

        Err(_e) => DEFAULT_PORT,
    }
}

pub fn init_logging(app: &str) {
    match env::var("LOG_JSON") {
        Ok(_) => json_logger::init(app, LevelFilter::Info).unwrap(),
        Err(_) => {
            env::set_var("RUST_LOG", "debug");
            pretty_env_logger::init()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn reads_port_from_environment() {
        env::set_var("PORT", "4000");
        assert_eq!(get_port(), 4000);
        env::remove_var("PORT");
    }

    #[test]
    #[serial]
    fn defaults_to_3000_when_unset() {
        env::remove_var("PORT");
        assert_eq!(get_port(), 3000);
    }

    #[test]
    #[serial]
    fn defaults_to_3000_when_unparseable() {
        env::set_var("PORT", "not-a-port");
        assert_eq!(get_port(), 3000);
        env::remove_var("PORT");
    }
}
