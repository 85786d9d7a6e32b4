//! Periodic SHT20 reader for Linux hosts.
//!
//! Reads its configuration from the environment (and a `.env` file if one is
//! present), then logs one temperature/humidity measurement per interval.
//! Set `RUST_LOG=info` to see the readings.

use embassy_executor::Spawner;
use embassy_time::Timer;
use log::{error, info, warn};

use sht20_core::Sht20;
use sht20_core::transport::Scan;
use sht20_linux::{HostConfig, LinuxTransport};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = match HostConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(2);
        }
    };

    info!(
        "Starting SHT20 reader on /dev/i2c-{} at address {:#04x}",
        config.sensor.bus, config.sensor.address
    );

    if config.scan {
        match LinuxTransport.scan(&config.sensor.bus) {
            Ok(found) => info!(
                "Devices on /dev/i2c-{}: {:02x?}",
                config.sensor.bus,
                found.as_slice()
            ),
            Err(e) => warn!("Bus scan failed: {}", e),
        }
    }

    let mut sensor = Sht20::with_embassy_delay(LinuxTransport, config.sensor);
    if let Err(e) = sensor.open(()).await {
        error!("Failed to open sensor: {}", e);
        std::process::exit(1);
    }

    let mut taken: u32 = 0;
    loop {
        match sensor.read().await {
            Ok(measurement) => {
                let fahrenheit = measurement.temperature.to_fahrenheit();
                info!(
                    "Temperature: {} ({:.2} {}), humidity: {}",
                    measurement.temperature,
                    fahrenheit.value(),
                    fahrenheit.unit(),
                    measurement.humidity
                );
            }
            // Corrupted frames and bus hiccups are retried on the next cycle
            Err(e) if e.is_transient() => warn!("Measurement failed: {}", e),
            Err(e) => {
                error!("Measurement failed: {}", e);
                break;
            }
        }

        taken += 1;
        if config.samples != 0 && taken >= config.samples {
            break;
        }

        Timer::after_millis(config.interval_ms).await;
    }

    if let Err(e) = sensor.close().await {
        error!("Failed to close sensor: {}", e);
    }
    info!("SHT20 reader exiting");
}
