//! NES/SNES backend

use crate::config::{Config, Mode};
use crate::error::Error;
use crate::gamepad::Gamepad;
use crate::interface::{LineConfig, PadInterface};
use crate::report::GamepadReport;
use crate::sampler;
use crate::snapshot::{self, PinSnapshot};

/// NES or SNES controller wired straight to GPIO
///
/// Owns the interface and both samples: the latest one (`update`) and the
/// last one handed to the host (`get_report`).
pub struct SnesPad<I>
where
    I: PadInterface,
{
    /// Hardware interface
    interface: I,
    /// Backend configuration
    config: Config,
    /// Sample taken by the last `init`/`update`
    last_sampled: PinSnapshot,
    /// Sample committed by the last `get_report`
    last_reported: PinSnapshot,
    /// Whether `init` has run
    ready: bool,
}

impl<I> SnesPad<I>
where
    I: PadInterface,
{
    /// Create a new backend; call [`Gamepad::init`] before polling
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            last_sampled: PinSnapshot::RELEASED,
            last_reported: PinSnapshot::RELEASED,
            ready: false,
        }
    }

    fn sample(&mut self) -> Result<(), Error<I>> {
        let snapshot = sampler::sample(&self.config, &mut self.interface).map_err(|e| {
            log::warn!("Pad read failed: {e:?}");
            Error::Interface(e)
        })?;

        if snapshot::changed(&snapshot, &self.last_reported) {
            log::trace!("Pad sample {:02x?}", snapshot.bytes());
        }
        self.last_sampled = snapshot;
        Ok(())
    }

    fn ensure_ready(&self) -> Result<(), Error<I>> {
        if self.ready {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Controller family fixed at construction
    pub fn mode(&self) -> Mode {
        self.config.mode()
    }

    /// Whether `init` has completed
    pub fn is_initialized(&self) -> bool {
        self.ready
    }

    /// Sample taken by the last `init`/`update`
    pub fn last_sampled(&self) -> PinSnapshot {
        self.last_sampled
    }

    /// Sample committed by the last `get_report`
    pub fn last_reported(&self) -> PinSnapshot {
        self.last_reported
    }

    /// Return the interface
    pub fn release(self) -> I {
        self.interface
    }
}

impl<I> Gamepad for SnesPad<I>
where
    I: PadInterface,
{
    type Error = Error<I>;

    fn init(&mut self) -> Result<(), Self::Error> {
        let lines = LineConfig {
            extra_mask: self.config.extra_line_mask(),
        };
        critical_section::with(|_cs| self.interface.configure(lines)).map_err(|e| {
            log::warn!("Pad configure failed: {e:?}");
            Error::Interface(e)
        })?;

        log::debug!(
            "Pad init: {:?}, primary map {:?}, home line {}",
            self.config.mode(),
            self.config.wiring().primary_map,
            self.config.wiring().home_line
        );

        self.sample()?;
        self.ready = true;
        Ok(())
    }

    fn update(&mut self) -> Result<(), Self::Error> {
        self.ensure_ready()?;
        self.sample()
    }

    fn changed(&self) -> Result<bool, Self::Error> {
        self.ensure_ready()?;
        Ok(snapshot::changed(&self.last_sampled, &self.last_reported))
    }

    fn get_report(&mut self, dst: Option<&mut GamepadReport>) -> Result<(), Self::Error> {
        self.ensure_ready()?;
        if let Some(report) = dst {
            report.fill(self.config.mode().pad_type(), &self.last_sampled);
        }
        self.last_reported = self.last_sampled;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use crate::interface::RawLevels;
    use core::convert::Infallible;

    /// Interface that replays fixed levels
    struct FixedLevels {
        levels: RawLevels,
        configured: Option<LineConfig>,
    }

    impl PadInterface for FixedLevels {
        type Error = Infallible;

        fn configure(&mut self, lines: LineConfig) -> Result<(), Self::Error> {
            self.configured = Some(lines);
            Ok(())
        }

        fn read_levels(&mut self) -> Result<RawLevels, Self::Error> {
            Ok(self.levels)
        }
    }

    fn pad(mode: Mode, levels: RawLevels) -> SnesPad<FixedLevels> {
        let config = Builder::new().mode(mode).build().unwrap();
        SnesPad::new(
            FixedLevels {
                levels,
                configured: None,
            },
            config,
        )
    }

    #[test]
    fn polling_before_init_is_rejected() {
        let mut pad = pad(Mode::Snes12ButtonHome, RawLevels::IDLE);
        assert!(matches!(pad.update(), Err(Error::NotInitialized)));
        assert!(matches!(pad.changed(), Err(Error::NotInitialized)));
        assert!(matches!(pad.get_report(None), Err(Error::NotInitialized)));
    }

    #[test]
    fn init_configures_lines_for_mode() {
        let mut pad = pad(Mode::Nes8Button, RawLevels::IDLE);
        pad.init().unwrap();
        assert!(pad.is_initialized());
        let interface = pad.release();
        assert_eq!(
            interface.configured,
            Some(LineConfig {
                extra_mask: 0b1_0000
            })
        );
    }

    #[test]
    fn init_seeds_last_sampled() {
        let levels = RawLevels {
            primary: 0xFE,
            extra: 0x1F,
        };
        let mut pad = pad(Mode::Snes12ButtonHome, levels);
        pad.init().unwrap();
        assert_eq!(pad.last_sampled(), PinSnapshot::new(0x01, 0x00));
        assert_eq!(pad.last_reported(), PinSnapshot::RELEASED);
        assert!(pad.changed().unwrap());
    }

    #[test]
    fn get_report_without_destination_still_commits() {
        let levels = RawLevels {
            primary: 0x7F,
            extra: 0x1F,
        };
        let mut pad = pad(Mode::Nes8Button, levels);
        pad.init().unwrap();
        assert!(pad.changed().unwrap());
        pad.get_report(None).unwrap();
        assert!(!pad.changed().unwrap());
        assert_eq!(pad.last_reported(), pad.last_sampled());
    }

    /// Interface whose lines cannot be configured
    struct Unconfigurable;

    impl PadInterface for Unconfigurable {
        type Error = &'static str;

        fn configure(&mut self, _lines: LineConfig) -> Result<(), Self::Error> {
            Err("pull-up refused")
        }

        fn read_levels(&mut self) -> Result<RawLevels, Self::Error> {
            Ok(RawLevels::IDLE)
        }
    }

    #[test]
    fn configure_failure_leaves_pad_uninitialized() {
        let config = Builder::new().mode(Mode::Nes8Button).build().unwrap();
        let mut pad = SnesPad::new(Unconfigurable, config);
        assert!(matches!(pad.init(), Err(Error::Interface("pull-up refused"))));
        assert!(!pad.is_initialized());
        assert!(matches!(pad.update(), Err(Error::NotInitialized)));
    }

    #[test]
    fn usable_through_trait_object() {
        let mut pad = pad(Mode::Snes12ButtonHome, RawLevels::IDLE);
        let host: &mut dyn Gamepad<Error = Error<FixedLevels>> = &mut pad;
        host.init().unwrap();
        let mut report = GamepadReport::new(crate::PadType::Nes);
        host.get_report(Some(&mut report)).unwrap();
        assert_eq!(report, GamepadReport::new(crate::PadType::Snes));
    }
}
