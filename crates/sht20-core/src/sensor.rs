//! SHT20 measurement sequencer
//!
//! One measurement is strictly request/response: write the trigger command,
//! wait the conversion time, read the 3-byte response, validate it and apply
//! the calibration formula. Every operation takes `&mut self`, so two
//! measurements on the same sensor can never overlap.
//!
//! Dropping a measurement future after its command was written abandons the
//! conversion on the sensor. Wait at least
//! [`crate::protocol::TEMPERATURE_CONVERSION_MS`]
//! before issuing the next command.

use embedded_hal_async::delay::DelayNs;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::Sht20Config;
use crate::error::{Sht20Error, StateError, TransportError};
use crate::protocol::{
    Command, HUMIDITY_DECIMAL_PLACES, TEMPERATURE_DECIMAL_PLACES, humidity_from_raw,
    temperature_from_raw,
};
use crate::raw::{RESPONSE_LEN, extract_raw_value};
use crate::transport::Transport;
use crate::units::{Humidity, Temperature, round};

/// Temperature and humidity taken back to back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub temperature: Temperature,
    pub humidity: Humidity,
}

/// Connection state owned by the sequencer.
enum Connection<H> {
    Closed,
    Open(H),
}

/// Driver for one SHT20 at one address.
///
/// `T` is the bus transport and `D` the async delay used to wait out the
/// conversion time (usually `embassy_time::Delay`).
pub struct Sht20<T: Transport, D> {
    transport: T,
    delay: D,
    config: Sht20Config<T::Bus>,
    connection: Connection<T::Handle>,
}

impl<T: Transport> Sht20<T, embassy_time::Delay> {
    /// Sequencer that waits on the Embassy timer.
    pub fn with_embassy_delay(transport: T, config: Sht20Config<T::Bus>) -> Self {
        Self::new(transport, embassy_time::Delay, config)
    }
}

impl<T, D> Sht20<T, D>
where
    T: Transport,
    D: DelayNs,
{
    /// Create a closed sequencer. Nothing is sent until [`Sht20::open`].
    pub fn new(transport: T, delay: D, config: Sht20Config<T::Bus>) -> Self {
        Self {
            transport,
            delay,
            config,
            connection: Connection::Closed,
        }
    }

    pub fn address(&self) -> u8 {
        self.config.address
    }

    pub fn config(&self) -> &Sht20Config<T::Bus> {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        matches!(self.connection, Connection::Open(_))
    }

    /// Open the bus connection.
    ///
    /// Fails with [`StateError::AlreadyOpen`] if a connection is held. If the
    /// transport fails the sequencer stays closed.
    pub async fn open(&mut self, options: T::Options) -> Result<(), Sht20Error<T::Error>> {
        if self.is_open() {
            return Err(StateError::AlreadyOpen.into());
        }

        let handle = self
            .transport
            .open(&self.config.bus, options)
            .await
            .map_err(Sht20Error::bus)?;
        self.connection = Connection::Open(handle);

        info!("SHT20 {:#04x}: connection opened", self.config.address);
        Ok(())
    }

    /// Close the bus connection.
    ///
    /// Fails with [`StateError::AlreadyClosed`] if nothing is open. The
    /// sequencer is closed afterwards even if the transport reports an error.
    pub async fn close(&mut self) -> Result<(), Sht20Error<T::Error>> {
        let Connection::Open(handle) = core::mem::replace(&mut self.connection, Connection::Closed)
        else {
            return Err(StateError::AlreadyClosed.into());
        };

        self.transport.close(handle).await.map_err(Sht20Error::bus)?;

        info!("SHT20 {:#04x}: connection closed", self.config.address);
        Ok(())
    }

    /// Measure the temperature, rounded to two decimal places, in °C.
    pub async fn read_temperature(&mut self) -> Result<Temperature, Sht20Error<T::Error>> {
        let raw = self.measure(Command::TriggerTemperatureNoHold).await?;
        let celsius = round(temperature_from_raw(raw), TEMPERATURE_DECIMAL_PLACES)?;

        Ok(Temperature::celsius(celsius))
    }

    /// Measure the relative humidity, rounded to one decimal place.
    pub async fn read_humidity(&mut self) -> Result<Humidity, Sht20Error<T::Error>> {
        let raw = self.measure(Command::TriggerHumidityNoHold).await?;
        let percent = round(humidity_from_raw(raw), HUMIDITY_DECIMAL_PLACES)?;

        Ok(Humidity::percent(percent))
    }

    /// Measure temperature, then humidity.
    ///
    /// The sensor converts one quantity at a time, so the two measurements
    /// run one after the other. Either failing fails the whole read.
    pub async fn read(&mut self) -> Result<Measurement, Sht20Error<T::Error>> {
        let temperature = self.read_temperature().await?;
        let humidity = self.read_humidity().await?;

        Ok(Measurement {
            temperature,
            humidity,
        })
    }

    /// Run one command/delay/read cycle and return the validated raw value.
    async fn measure(&mut self, command: Command) -> Result<u16, Sht20Error<T::Error>> {
        let address = self.config.address;
        let Connection::Open(handle) = &mut self.connection else {
            return Err(StateError::NotOpen.into());
        };

        self.transport
            .write(handle, address, &[command.code()])
            .await
            .map_err(Sht20Error::bus)?;
        debug!("SHT20 {:#04x}: sent {:?}", address, command);

        self.delay.delay_ms(command.conversion_time_ms()).await;

        let mut response = [0u8; RESPONSE_LEN];
        let received = self
            .transport
            .read(handle, address, &mut response)
            .await
            .map_err(Sht20Error::bus)?;
        if received < RESPONSE_LEN {
            return Err(TransportError::ShortRead {
                expected: RESPONSE_LEN,
                actual: received,
            }
            .into());
        }

        let raw = extract_raw_value(&response)?;
        debug!("SHT20 {:#04x}: raw value {:#06x}", address, raw);

        Ok(raw)
    }
}
