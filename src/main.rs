//! touch2usb - I2C touch controller to USB HID digitizer bridge.
//!
//! Task layout:
//! - `touch_task`: waits for the chip's INT falling edge, reads the
//!   point table over I2C, publishes the frame.
//! - `report_task`: encodes each published frame into the active HID
//!   layout and writes it to the digitizer endpoint.
//! - `usb_task`: runs the embassy-usb device (enumeration, endpoints).
//! - `led_task`: status blinker; solid off while the bus is suspended.
//!
//! The I2C traffic never runs in interrupt context: the GPIO edge only
//! wakes `touch_task`, which does the bus reads in task context. The
//! frame handoff is a single `Signal` with latest-value semantics -
//! the report task sees a whole frame or the previous one, never a
//! torn point table.

#![no_std]
#![no_main]

mod usb;

use defmt::{info, unwrap, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Delay, Duration, Timer};
use panic_probe as _;

use touch2usb::config;
use touch2usb::touch::{TouchController, TouchFrame};

bind_interrupts!(struct Irqs {
    I2C1_IRQ => i2c::InterruptHandler<peripherals::I2C1>;
});

/// Latest touch frame, written only by `touch_task` and read only by
/// the report task.
static FRAME: Signal<CriticalSectionRawMutex, TouchFrame> = Signal::new();

type TouchBus = I2c<'static, peripherals::I2C1, i2c::Async>;
type Touch = TouchController<TouchBus, Input<'static>, Output<'static>, Delay>;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("touch2usb starting");

    // Touch controller on I2C1: SDA=GPIO18, SCL=GPIO19 (see config.rs).
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = config::TOUCH_I2C_HZ;
    let bus = I2c::new_async(p.I2C1, p.PIN_19, p.PIN_18, Irqs, i2c_config);

    let int = Input::new(p.PIN_21, Pull::Up);
    let rst = Output::new(p.PIN_20, Level::High);
    let mut touch = TouchController::new(bus, int, rst, Delay);

    match touch.init().await {
        Ok(()) => {
            let id = touch.identity();
            info!(
                "touch chip up: product={} fw={=u16:#x} res={=u16}x{=u16} vendor={=u8:#x}",
                id.product_id,
                id.firmware_version,
                id.x_resolution,
                id.y_resolution,
                id.vendor_id
            );
            if !id.is_valid() {
                warn!("chip identification returned no product id");
            }
        }
        // Leave recovery to the touch task's fault/reset path.
        Err(e) => warn!("touch init failed: {}", e),
    }

    let usb_dev = usb::hid_device::init(p.USB);

    unwrap!(spawner.spawn(usb_task(usb_dev.device)));
    unwrap!(spawner.spawn(report_task(usb_dev.writer)));
    unwrap!(spawner.spawn(touch_task(touch)));
    unwrap!(spawner.spawn(led_task(Output::new(p.PIN_6, Level::Low))));
}

/// Service the touch controller: one poll per INT falling edge.
///
/// A failed poll skips the frame. After `TOUCH_FAULT_RESET_THRESHOLD`
/// consecutive faults the chip gets a hard reset - the only recovery
/// the protocol offers.
#[embassy_executor::task]
async fn touch_task(mut touch: Touch) -> ! {
    let mut faults: u8 = 0;

    loop {
        if touch.wait_for_touch().await.is_err() {
            continue;
        }

        match touch.poll_points().await {
            Ok(_bytes) => {
                faults = 0;
                FRAME.signal(touch.frame());
            }
            Err(e) => {
                faults = faults.saturating_add(1);
                warn!(
                    "touch poll failed: {} ({}/{})",
                    e,
                    faults,
                    config::TOUCH_FAULT_RESET_THRESHOLD
                );
                if faults >= config::TOUCH_FAULT_RESET_THRESHOLD {
                    warn!("forcing touch chip reset");
                    if let Err(e) = touch.reset().await {
                        warn!("touch chip reset failed: {}", e);
                    }
                    faults = 0;
                }
            }
        }
    }
}

/// Encode published frames and write them to the USB endpoint.
#[embassy_executor::task]
async fn report_task(
    writer: embassy_usb::class::hid::HidWriter<
        'static,
        usb::hid_device::UsbBus,
        { touch2usb::hid::ACTIVE_REPORT_LEN },
    >,
) -> ! {
    usb::hid_device::run_report_writer(writer, &FRAME).await
}

/// Run the USB device stack.
#[embassy_executor::task]
async fn usb_task(device: embassy_usb::UsbDevice<'static, usb::hid_device::UsbBus>) -> ! {
    usb::hid_device::run_usb_device(device).await
}

/// Status LED: steady blink while running, off while the host has the
/// bus suspended.
#[embassy_executor::task]
async fn led_task(mut led: Output<'static>) -> ! {
    let suspend = usb::hid_device::suspend_signal();

    loop {
        match select(
            Timer::after(Duration::from_millis(config::LED_BLINK_MS)),
            suspend.wait(),
        )
        .await
        {
            Either::First(()) => led.toggle(),
            Either::Second(suspended) => {
                if suspended {
                    led.set_low();
                    // Hold until the host resumes the bus.
                    while suspend.wait().await {}
                }
            }
        }
    }
}
