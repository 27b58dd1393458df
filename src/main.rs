#![no_std]
#![no_main]

use defmt::*;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_nrf::config::{Config, HfclkSource};
use embassy_time::{Duration, Timer};
use panic_probe as _;

use nrf_ble_rx::radio::{configure_rx, NrfRadio, RadioSnapshot, RxConfig};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Starting nRF52820 BLE RX firmware");

    // The radio needs the 32 MHz crystal; the internal RC is not accurate enough for BLE
    let mut nrf_config = Config::default();
    nrf_config.hfclk_source = HfclkSource::ExternalXtal;

    let p = embassy_nrf::init(nrf_config);
    info!("Embassy initialized, configuring RADIO...");

    let mut radio = NrfRadio::new(p.RADIO);
    radio.disable();

    configure_rx(&mut radio);

    let snapshot = RadioSnapshot::capture(&radio);
    debug!("RADIO snapshot: {}", snapshot);
    match snapshot.verify(&RxConfig::BLE_UNCODED_1M) {
        Ok(()) => info!(
            "RADIO ready, access address 0x{:08X}",
            snapshot.access_address().value()
        ),
        Err(e) => error!("RADIO configuration did not stick: {}", e),
    }

    // Main loop - just logging heartbeat
    loop {
        Timer::after(Duration::from_secs(10)).await;
        info!("Heartbeat - system running");
    }
}
