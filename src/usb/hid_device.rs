//! USB HID digitizer device.
//!
//! Initialises the Embassy USB stack on the RP2040 hardware USB
//! peripheral and exposes one HID IN endpoint carrying the active
//! digitizer report layout.

use defmt::{info, warn};
use embassy_rp::usb::Driver;
use embassy_rp::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_usb::class::hid::{Config as HidConfig, HidWriter, State};
use embassy_usb::{Builder, Config, UsbDevice};
use static_cell::StaticCell;

use touch2usb::config;
use touch2usb::hid::{ActiveReport, ReportEncoder, ACTIVE_REPORT_LEN};
use touch2usb::touch::TouchFrame;

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => embassy_rp::usb::InterruptHandler<peripherals::USB>;
});

static HID_STATE: StaticCell<State> = StaticCell::new();
static USB_CONFIG_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_BOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_MSOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_CTRL_BUF: StaticCell<[u8; 128]> = StaticCell::new();
static USB_POWER_HANDLER: StaticCell<UsbPowerHandler> = StaticCell::new();
static USB_SUSPEND_SIGNAL: Signal<CriticalSectionRawMutex, bool> = Signal::new();

struct UsbPowerHandler;

impl embassy_usb::Handler for UsbPowerHandler {
    fn suspended(&mut self, suspended: bool) {
        USB_SUSPEND_SIGNAL.signal(suspended);
    }
}

/// USB bus suspend/resume signal.
///
/// Emits `true` when the host suspends the bus and `false` when resumed.
pub fn suspend_signal() -> &'static Signal<CriticalSectionRawMutex, bool> {
    &USB_SUSPEND_SIGNAL
}

/// Shorthand for the RP2040 USB driver type.
pub type UsbBus = Driver<'static, peripherals::USB>;

/// Build result containing the USB device runner and the digitizer
/// report writer.
pub struct UsbHidDevice {
    pub device: UsbDevice<'static, UsbBus>,
    pub writer: HidWriter<'static, UsbBus, ACTIVE_REPORT_LEN>,
}

/// Initialise the USB stack and create the HID digitizer device.
///
/// Must be called exactly once.  All static buffers are consumed here.
pub fn init(usb: peripherals::USB) -> UsbHidDevice {
    let driver = Driver::new(usb, Irqs);

    // USB device-level configuration.
    let mut usb_config = Config::new(config::USB_VID, config::USB_PID);
    usb_config.manufacturer = Some(config::USB_MANUFACTURER);
    usb_config.product = Some(config::USB_PRODUCT);
    usb_config.serial_number = Some(config::USB_SERIAL_NUMBER);
    usb_config.max_power = 100; // mA
    usb_config.max_packet_size_0 = 64;

    // Allocate static descriptor buffers.
    let config_desc = USB_CONFIG_DESC.init([0u8; 256]);
    let bos_desc = USB_BOS_DESC.init([0u8; 256]);
    let msos_desc = USB_MSOS_DESC.init([0u8; 256]);
    let ctrl_buf = USB_CTRL_BUF.init([0u8; 128]);

    // Build the USB device.
    let mut builder = Builder::new(
        driver,
        usb_config,
        config_desc,
        bos_desc,
        msos_desc,
        ctrl_buf,
    );

    let usb_handler = USB_POWER_HANDLER.init(UsbPowerHandler);
    builder.handler(usb_handler);

    // The advertised descriptor and the report task's encoder are the
    // same type, selected by the `detailed-report` feature.
    let hid_state = HID_STATE.init(State::new());
    let hid_config = HidConfig {
        report_descriptor: ActiveReport::DESCRIPTOR,
        request_handler: None,
        poll_ms: config::USB_HID_POLL_MS,
        max_packet_size: 64,
    };
    let writer = HidWriter::new(&mut builder, hid_state, hid_config);

    let device = builder.build();

    info!(
        "USB HID digitizer initialised (report id {}, {} bytes)",
        ActiveReport::REPORT_ID,
        ACTIVE_REPORT_LEN
    );

    UsbHidDevice { device, writer }
}

/// Run the USB device stack - must be spawned as a dedicated Embassy task.
///
/// This handles USB enumeration, suspend/resume, and endpoint servicing.
/// It runs forever (or until the USB cable is disconnected).
pub async fn run_usb_device(mut device: UsbDevice<'static, UsbBus>) -> ! {
    info!("USB device task started");
    device.run().await
}

/// Report forwarding loop - encodes each published touch frame and
/// writes it to the digitizer IN endpoint.
///
/// The encoder is rebuilt from the frame immediately before every
/// transmission; no report history is retained beyond the compact
/// layout's own stale-slot bytes.
pub async fn run_report_writer(
    mut writer: HidWriter<'static, UsbBus, ACTIVE_REPORT_LEN>,
    frames: &'static Signal<CriticalSectionRawMutex, TouchFrame>,
) -> ! {
    info!("report task started - waiting for touch frames");

    let mut encoder = ActiveReport::new();
    let mut buf = [0u8; ACTIVE_REPORT_LEN];

    loop {
        let frame = frames.wait().await;

        // Classify the chip's count nibble; an anomalous value is
        // logged and clamped rather than trusted.
        let count = match frame.status.contact_count() {
            Ok(n) => n,
            Err(e) => {
                warn!("touch count anomaly: {}", e);
                touch2usb::touch::MAX_POINTS as u8
            }
        };

        match encoder.encode(&frame.points, count, &mut buf) {
            Ok(n) => {
                if let Err(_e) = writer.write(&buf[..n]).await {
                    warn!("USB digitizer write failed");
                }
            }
            Err(e) => warn!("report encode failed: {}", e),
        }
    }
}
