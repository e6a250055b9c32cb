use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::net::IpAddr;

#[derive(Debug, Deserialize)]
pub struct Conf {
    pub port: u16,
    pub address: IpAddr,
    pub log_filter: String,
}

impl Conf {
    pub fn new() -> figment::Result<Conf> {
        Conf::figment().extract()
    }

    pub fn figment() -> Figment {
        let default_conf = include_str!("../calc.conf");

        Figment::new()
            .merge(Toml::string(default_conf))
            .merge(Env::raw().only(&["PORT"]))
    }

    /// Server config built from Rocket's defaults, so `Rocket.toml` and
    /// `ROCKET_*` variables are never read.
    pub fn rocket_figment(&self) -> Figment {
        Figment::from(rocket::Config::default())
            .merge(("port", self.port))
            .merge(("address", self.address))
    }
}

#[cfg(test)]
mod test {
    use super::Conf;
    use figment::Jail;
    use std::net::{IpAddr, Ipv4Addr};

    #[test]
    fn defaults() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let conf = Conf::new()?;
            assert_eq!(3000, conf.port);
            assert_eq!(IpAddr::V4(Ipv4Addr::UNSPECIFIED), conf.address);
            assert_eq!("info", conf.log_filter);
            Ok(())
        });
    }

    #[test]
    fn port_from_env() {
        Jail::expect_with(|jail| {
            jail.set_env("PORT", 8080);
            assert_eq!(8080, Conf::new()?.port);
            Ok(())
        });
    }

    #[test]
    fn invalid_port() {
        Jail::expect_with(|jail| {
            jail.set_env("PORT", "not-a-port");
            assert!(Conf::new().is_err());
            Ok(())
        });
    }

    #[test]
    fn unrelated_env_is_ignored() {
        Jail::expect_with(|jail| {
            jail.set_env("LOG_FILTER", "trace");
            assert_eq!("info", Conf::new()?.log_filter);
            Ok(())
        });
    }

    #[test]
    fn rocket_figment() -> figment::Result<()> {
        let conf = Conf {
            port: 4000,
            address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            log_filter: "info".into(),
        };
        let rocket_conf: rocket::Config = conf.rocket_figment().extract()?;
        assert_eq!(4000, rocket_conf.port);
        assert_eq!(IpAddr::V4(Ipv4Addr::LOCALHOST), rocket_conf.address);
        Ok(())
    }
}
