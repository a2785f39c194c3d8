//! Device commands and properties.

use crate::properties::switch;
use crate::scanner::constants::{T_PROPERTY, T_VERSION};
use crate::{
    BaudRate, BuzzerFrequency, ByteChannel, CaseConversion, Clock, CommMode, ContinuousInterval,
    Error, Opcode, ReadingArea, ReadingMode, Response, Scanner, Sensitivity, SerialDataFormat,
    UsbDataFormat,
};
use log::{error, warn};

impl<C, K> Scanner<C, K>
where
    C: ByteChannel,
    K: Clock,
{
    /// Triggers a scan.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the channel fails.
    pub fn start_scan(&mut self) -> Result<Response, Error> {
        self.send(Opcode::StartScan, "", T_PROPERTY)
    }

    /// Stops scanning.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the channel fails.
    pub fn stop_scan(&mut self) -> Result<Response, Error> {
        self.send(Opcode::StopScan, "", T_PROPERTY)
    }

    /// Restores the module's factory defaults.
    ///
    /// Note that this also resets the module's bit rate to [`BaudRate::HIGH`],
    /// so the connection has to be [established](Self::establish) again afterwards.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the channel fails.
    pub fn factory_default(&mut self) -> Result<Response, Error> {
        let response = self.send(Opcode::SetDefaults, "", T_PROPERTY)?;

        if response.is_acknowledged() {
            self.connection.set_established(false);
        }

        Ok(response)
    }

    /// Queries the firmware version.
    ///
    /// This is the slowest command of the module and doubles as a presence check.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the channel fails.
    pub fn query_version(&mut self) -> Result<Response, Error> {
        self.send(Opcode::GetVersion, "", T_VERSION)
    }

    /// Sets the buzzer drive mode.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the channel fails.
    pub fn set_buzzer_frequency(&mut self, frequency: BuzzerFrequency) -> Result<Response, Error> {
        self.send(Opcode::BuzzerFrequency, frequency.argument(), T_PROPERTY)
    }

    /// Enables or disables the beep after a successful decode.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the channel fails.
    pub fn set_decode_beep(&mut self, on: bool) -> Result<Response, Error> {
        self.send(Opcode::DecodeBeep, switch(on), T_PROPERTY)
    }

    /// Enables or disables the beep on power-up.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the channel fails.
    pub fn set_boot_beep(&mut self, on: bool) -> Result<Response, Error> {
        self.send(Opcode::BootBeep, switch(on), T_PROPERTY)
    }

    /// Switches the white illumination LED on or off.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the channel fails.
    pub fn try_set_illumination(&mut self, on: bool) -> Result<Response, Error> {
        self.send(Opcode::FlashLight, switch(on), T_PROPERTY)
    }

    /// Switches the white illumination LED on or off.
    ///
    /// Returns `true` if the module acknowledged the change.
    pub fn set_illumination(&mut self, on: bool) -> bool {
        succeeded("illumination", self.try_set_illumination(on))
    }

    /// Switches the aiming light on or off.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the channel fails.
    pub fn set_aim_light(&mut self, on: bool) -> Result<Response, Error> {
        self.send(Opcode::AimLight, switch(on), T_PROPERTY)
    }

    /// Sets the portion of the image used for decoding.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the channel fails.
    pub fn set_reading_area(&mut self, area: ReadingArea) -> Result<Response, Error> {
        self.send(Opcode::ReadingArea, area.argument(), T_PROPERTY)
    }

    /// Enables or disables decoding of mirrored codes.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the channel fails.
    pub fn set_mirror_flip(&mut self, on: bool) -> Result<Response, Error> {
        self.send(Opcode::MirrorFlip, switch(on), T_PROPERTY)
    }

    /// Sets the character encoding used on USB.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the channel fails.
    pub fn set_usb_data_format(&mut self, format: UsbDataFormat) -> Result<Response, Error> {
        self.send(Opcode::UsbDataFormat, format.argument(), T_PROPERTY)
    }

    /// Sets the character encoding used on the serial interface.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the channel fails.
    pub fn set_serial_data_format(&mut self, format: SerialDataFormat) -> Result<Response, Error> {
        self.send(Opcode::SerialDataFormat, format.argument(), T_PROPERTY)
    }

    /// Enables or disables invoice mode.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the channel fails.
    pub fn set_invoice_mode(&mut self, on: bool) -> Result<Response, Error> {
        self.send(Opcode::InvoiceMode, switch(on), T_PROPERTY)
    }

    /// Enables or disables the virtual keyboard.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the channel fails.
    pub fn set_virtual_keyboard(&mut self, on: bool) -> Result<Response, Error> {
        self.send(Opcode::VirtualKeyboard, switch(on), T_PROPERTY)
    }

    /// Selects the interface the module talks to the host over.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the channel fails.
    pub fn set_comm_mode(&mut self, mode: CommMode) -> Result<Response, Error> {
        self.send(Opcode::CommMode, mode.argument(), T_PROPERTY)
    }

    /// Changes the module's bit rate.
    ///
    /// If the module acknowledges, the channel follows it to the new bit rate.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the channel fails.
    pub fn set_module_baud_rate(&mut self, baud_rate: BaudRate) -> Result<Response, Error> {
        let response = self.send(Opcode::BaudRate, baud_rate.argument(), T_PROPERTY)?;

        if response.is_acknowledged() {
            self.switch_baud_rate(baud_rate)?;
        }

        Ok(response)
    }

    /// Sets the reading mode.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the channel fails.
    pub fn set_reading_mode(&mut self, mode: ReadingMode) -> Result<Response, Error> {
        self.send(Opcode::ReadingMode, mode.argument(), T_PROPERTY)
    }

    /// Sets the output behaviour of continuous reading mode.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the channel fails.
    pub fn set_continuous_interval(
        &mut self,
        interval: ContinuousInterval,
    ) -> Result<Response, Error> {
        self.send(Opcode::ContinuousModeInterval, interval.argument(), T_PROPERTY)
    }

    /// Sets the motion detection threshold.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the channel fails.
    pub fn set_motion_sensitivity(&mut self, sensitivity: Sensitivity) -> Result<Response, Error> {
        self.send(Opcode::MotionSensitivity, sensitivity.argument(), T_PROPERTY)
    }

    /// Enables or disables prefixing records with the code ID.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the channel fails.
    pub fn set_transfer_code_id(&mut self, on: bool) -> Result<Response, Error> {
        self.send(Opcode::TransferCodeId, switch(on), T_PROPERTY)
    }

    /// Sets the case conversion applied in keyboard mode.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the channel fails.
    pub fn set_case_conversion(&mut self, conversion: CaseConversion) -> Result<Response, Error> {
        self.send(Opcode::KbdCaseConversion, conversion.argument(), T_PROPERTY)
    }

    /// Enables all 1D symbologies.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the channel fails.
    pub fn enable_all_1d(&mut self) -> Result<Response, Error> {
        self.send(Opcode::EnableAll1D, "", T_PROPERTY)
    }

    /// Disables all 1D symbologies.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the channel fails.
    pub fn disable_all_1d(&mut self) -> Result<Response, Error> {
        self.send(Opcode::DisableAll1D, "", T_PROPERTY)
    }

    /// Enables all 2D symbologies.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the channel fails.
    pub fn enable_all_2d(&mut self) -> Result<Response, Error> {
        self.send(Opcode::EnableAll2D, "", T_PROPERTY)
    }

    /// Disables all 2D symbologies.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the channel fails.
    pub fn disable_all_2d(&mut self) -> Result<Response, Error> {
        self.send(Opcode::DisableAll2D, "", T_PROPERTY)
    }

    /// Enables motion sensitive reading with the given detection threshold.
    ///
    /// This switches the reading mode and then sets the threshold.
    /// The threshold is only sent if the reading mode was acknowledged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] without any I/O if `level` is not one of
    /// 15, 20, 30, 50 or 100, or an [`Error`] if the channel fails.
    pub fn enable_motion_sense(&mut self, level: u8) -> Result<Response, Error> {
        let sensitivity = Sensitivity::try_from(level)?;
        let response = self.set_reading_mode(ReadingMode::Motion)?;

        if !response.is_acknowledged() {
            return Ok(response);
        }

        self.set_motion_sensitivity(sensitivity)
    }

    /// Disables motion sensitive reading by returning to manual reading mode.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the channel fails.
    pub fn disable_motion_sense(&mut self) -> Result<Response, Error> {
        self.set_reading_mode(ReadingMode::Manual)
    }

    /// Enables or disables motion sensitive reading.
    ///
    /// When enabling without a `level`, the module's default sensitivity is used.
    /// The `level` is ignored when disabling.
    ///
    /// # Errors
    ///
    /// See [`enable_motion_sense()`](Self::enable_motion_sense) and
    /// [`disable_motion_sense()`](Self::disable_motion_sense).
    pub fn try_set_motion_sense(
        &mut self,
        enabled: bool,
        level: Option<u8>,
    ) -> Result<Response, Error> {
        if enabled {
            self.enable_motion_sense(level.unwrap_or(Sensitivity::default() as u8))
        } else {
            self.disable_motion_sense()
        }
    }

    /// Enables or disables motion sensitive reading.
    ///
    /// Returns `true` if the module acknowledged all commands involved.
    pub fn set_motion_sense(&mut self, enabled: bool, level: Option<u8>) -> bool {
        succeeded("motion sense", self.try_set_motion_sense(enabled, level))
    }
}

/// Collapses the outcome of a capability into a boolean.
fn succeeded(capability: &str, result: Result<Response, Error>) -> bool {
    match result {
        Ok(Response::Acknowledged) => true,
        Ok(response) => {
            warn!("Setting {capability} failed: {response}");
            false
        }
        Err(error) => {
            error!("Setting {capability} failed: {error}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::protocol::{ACK, NAK};
    use crate::simulation::Simulation;
    use crate::{BaudRate, CommMode, Error, ReadingArea, Response};
    use proptest::prelude::*;
    use std::time::Duration;

    const VALID: [u8; 5] = [15, 20, 30, 50, 100];

    #[test]
    fn test_property_frames() {
        let simulation = Simulation::new();
        simulation.attach_module(BaudRate::HIGH);
        let mut scanner = simulation.scanner();

        scanner.set_illumination(true);
        scanner.set_illumination(false);
        scanner.set_reading_area(ReadingArea::Center40).ok();
        scanner.set_comm_mode(CommMode::Serial).ok();
        scanner.disable_all_2d().ok();

        assert_eq!(
            simulation.written(),
            vec![
                b"^_^LAMENA1.".to_vec(),
                b"^_^LAMENA0.".to_vec(),
                b"^_^IMGREG3.".to_vec(),
                b"^_^POR232.".to_vec(),
                b"^_^AQRDIS.".to_vec(),
            ]
        );
    }

    #[test]
    fn test_illumination_outcomes() {
        let simulation = Simulation::new();
        let mut scanner = simulation.scanner();

        simulation.reply_after(Duration::from_millis(10), ACK);
        assert!(scanner.set_illumination(true));

        simulation.reply_after(Duration::from_millis(10), NAK);
        assert_eq!(
            scanner.try_set_illumination(true).ok(),
            Some(Response::Rejected)
        );

        assert_eq!(
            scanner.try_set_illumination(true).ok(),
            Some(Response::TimedOut)
        );
        assert!(!scanner.set_illumination(true));
    }

    #[test]
    fn test_enable_motion_sense_sends_two_commands() {
        for level in VALID {
            let simulation = Simulation::new();
            simulation.attach_module(BaudRate::HIGH);
            let mut scanner = simulation.scanner();

            assert_eq!(
                scanner.enable_motion_sense(level).ok(),
                Some(Response::Acknowledged)
            );
            assert_eq!(
                simulation.written(),
                vec![
                    b"^_^SCMMDH.".to_vec(),
                    format!("^_^MDTTHR{level}.").into_bytes()
                ]
            );
        }
    }

    #[test]
    fn test_enable_motion_sense_stops_after_refusal() {
        let simulation = Simulation::new();
        simulation.reply_after(Duration::from_millis(10), NAK);
        let mut scanner = simulation.scanner();

        assert_eq!(
            scanner.enable_motion_sense(50).ok(),
            Some(Response::Rejected)
        );
        assert_eq!(simulation.written(), vec![b"^_^SCMMDH.".to_vec()]);
        assert!(!scanner.set_motion_sense(true, Some(50)));
    }

    #[test]
    fn test_set_motion_sense() {
        let simulation = Simulation::new();
        simulation.attach_module(BaudRate::HIGH);
        let mut scanner = simulation.scanner();

        assert!(scanner.set_motion_sense(true, None));
        assert!(scanner.set_motion_sense(false, Some(42)));
        assert_eq!(
            simulation.written(),
            vec![
                b"^_^SCMMDH.".to_vec(),
                b"^_^MDTTHR20.".to_vec(),
                b"^_^SCMMAN.".to_vec(),
            ]
        );
    }

    #[test]
    fn test_module_baud_rate_follows_module() {
        let simulation = Simulation::new();
        let module = simulation.attach_module(BaudRate::HIGH);
        let mut scanner = simulation.scanner();

        assert_eq!(
            scanner.set_module_baud_rate(BaudRate::Bps57600).ok(),
            Some(Response::Acknowledged)
        );
        assert_eq!(module.get(), BaudRate::Bps57600);
        assert_eq!(scanner.connection().baud_rate(), BaudRate::Bps57600);
        assert_eq!(simulation.baud_rate_changes(), vec![BaudRate::Bps57600]);
    }

    #[test]
    fn test_module_baud_rate_unchanged_on_timeout() {
        let simulation = Simulation::new();
        let mut scanner = simulation.scanner();

        assert_eq!(
            scanner.set_module_baud_rate(BaudRate::Bps57600).ok(),
            Some(Response::TimedOut)
        );
        assert_eq!(scanner.connection().baud_rate(), BaudRate::HIGH);
        assert!(simulation.baud_rate_changes().is_empty());
    }

    proptest! {
        #[test]
        fn test_invalid_motion_sensitivity_writes_nothing(level in any::<u8>()) {
            prop_assume!(!VALID.contains(&level));
            let simulation = Simulation::new();
            simulation.attach_module(BaudRate::HIGH);
            let mut scanner = simulation.scanner();

            let is_invalid_argument = matches!(
                scanner.enable_motion_sense(level),
                Err(Error::InvalidArgument { .. })
            );
            prop_assert!(is_invalid_argument);
            prop_assert!(!scanner.set_motion_sense(true, Some(level)));
            prop_assert!(simulation.written().is_empty());
        }
    }
}
