mod conf;
mod controller;
mod model;
mod repository;
mod service;

use anyhow::Result;
use conf::Conf;
use repository::ExchangeRateRepository;
use rocket::{catchers, fairing::AdHoc, routes, Build, Rocket};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[rocket::main]
async fn main() -> Result<()> {
    let conf = Conf::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&conf.log_filter)?)
        .init();

    info!(port = conf.port, address = %conf.address, "Starting server");

    let _rocket = prepare(rocket::custom(conf.rocket_figment()))
        .launch()
        .await?;

    Ok(())
}

pub fn prepare(rocket: Rocket<Build>) -> Rocket<Build> {
    let exchange_rates = ExchangeRateRepository::new();
    info!(
        count = exchange_rates.select_all().len(),
        "Loaded exchange rates"
    );

    rocket
        .manage(exchange_rates)
        .mount(
            "/",
            routes![
                controller::info::get,
                controller::conversion::get,
                controller::vat::get,
                controller::discount::get,
            ],
        )
        .register("/", catchers![controller::catcher::default])
        .attach(AdHoc::on_liftoff("Announce", |rocket| {
            Box::pin(async move {
                info!(
                    "Server running on http://localhost:{}",
                    rocket.config().port
                );
            })
        }))
}
