//! Windows Biometric Framework capture backend.
//!
//! One capture runs as: enumerate fingerprint units, open a raw system-pool
//! session, block in `WinBioCaptureSample`, copy the returned container out
//! and free it, parse the container. The session handle and the sample
//! buffer both live in RAII guards so they are released on every path.

use crate::fingerprint_pipeline::common::error::{CaptureError, Result};
use crate::fingerprint_pipeline::sensor::capture::FingerprintSensor;
use crate::fingerprint_pipeline::sensor::types::{CaptureConfig, FingerprintSample, SensorInfo};

#[cfg(windows)]
use std::sync::mpsc;
#[cfg(windows)]
use std::thread;
#[cfg(windows)]
use std::time::Duration;

#[cfg(windows)]
use tracing::{debug, info};

#[cfg(windows)]
use crate::fingerprint_pipeline::sensor::bir;
#[cfg(windows)]
use crate::fingerprint_pipeline::sensor::types::RejectReason;
#[cfg(windows)]
use crate::fingerprint_pipeline::sensor::winbio_sys as sys;

/// Sensor backed by `winbio.dll`. On non-Windows targets every call reports
/// the sensor as unavailable so callers fail cleanly instead of linking
/// against a library that does not exist.
#[derive(Debug, Default)]
pub struct WinBioSensor;

impl FingerprintSensor for WinBioSensor {
    #[cfg(windows)]
    fn capture_sample(&self, config: &CaptureConfig) -> Result<FingerprintSample> {
        let units = enumerate_units()?;
        if units.is_empty() {
            return Err(CaptureError::SensorUnavailable(
                "no fingerprint units are attached".to_string(),
            ));
        }

        info!(units = units.len(), "Opening raw capture session");
        let session = Session::open()?;

        let watchdog = config
            .timeout
            .map(|timeout| Watchdog::arm(session.handle(), timeout));
        let captured = session.capture_raw();
        let timed_out = watchdog.is_some_and(Watchdog::disarm);

        let (buffer, unit_id) = match captured {
            Err(CaptureError::Canceled) if timed_out => return Err(CaptureError::Timeout),
            other => other?,
        };

        debug!(unit_id, bytes = buffer.len(), "Sample container received");
        bir::parse_bir(&buffer, unit_id)
    }

    #[cfg(not(windows))]
    fn capture_sample(&self, _config: &CaptureConfig) -> Result<FingerprintSample> {
        Err(CaptureError::SensorUnavailable(
            "fingerprint capture requires the Windows Biometric Framework".to_string(),
        ))
    }
}

/// Lists the fingerprint units the biometric service knows about.
#[cfg(windows)]
pub fn enumerate_units() -> Result<Vec<SensorInfo>> {
    let mut schemas: *mut sys::WINBIO_UNIT_SCHEMA = std::ptr::null_mut();
    let mut count: usize = 0;

    let hr = unsafe { sys::WinBioEnumBiometricUnits(sys::WINBIO_TYPE_FINGERPRINT, &mut schemas, &mut count) };
    if hr != sys::S_OK {
        return Err(CaptureError::SessionError(format!(
            "WinBioEnumBiometricUnits failed with {}",
            hresult_message(hr)
        )));
    }
    if schemas.is_null() {
        return Ok(Vec::new());
    }

    let units = unsafe {
        std::slice::from_raw_parts(schemas, count)
            .iter()
            .map(|schema| SensorInfo {
                unit_id: schema.UnitId,
                description: wide_to_string(&schema.Description),
                manufacturer: wide_to_string(&schema.Manufacturer),
                model: wide_to_string(&schema.Model),
                serial_number: wide_to_string(&schema.SerialNumber),
            })
            .collect()
    };
    let _ = unsafe { sys::WinBioFree(schemas.cast()) };

    Ok(units)
}

#[cfg(not(windows))]
pub fn enumerate_units() -> Result<Vec<SensorInfo>> {
    Err(CaptureError::SensorUnavailable(
        "fingerprint capture requires the Windows Biometric Framework".to_string(),
    ))
}

/// Open session handle. Dropping it closes the session, so early returns
/// and panics in callers cannot leak handles in the biometric service.
#[cfg(windows)]
struct Session {
    handle: sys::WINBIO_SESSION_HANDLE,
}

#[cfg(windows)]
impl Session {
    fn open() -> Result<Self> {
        let mut handle: sys::WINBIO_SESSION_HANDLE = 0;
        let hr = unsafe {
            sys::WinBioOpenSession(
                sys::WINBIO_TYPE_FINGERPRINT,
                sys::WINBIO_POOL_SYSTEM,
                sys::WINBIO_FLAG_RAW,
                std::ptr::null(),
                0,
                std::ptr::null(),
                &mut handle,
            )
        };
        if hr != sys::S_OK {
            return Err(CaptureError::SessionError(format!(
                "WinBioOpenSession failed with {}",
                hresult_message(hr)
            )));
        }
        Ok(Self { handle })
    }

    fn handle(&self) -> sys::WINBIO_SESSION_HANDLE {
        self.handle
    }

    /// Blocks until a touch, a cancel, or a session failure.
    fn capture_raw(&self) -> Result<(Vec<u8>, u32)> {
        let mut unit_id: sys::WINBIO_UNIT_ID = 0;
        let mut sample: *mut sys::WINBIO_BIR = std::ptr::null_mut();
        let mut sample_size: usize = 0;
        let mut reject_detail: sys::WINBIO_REJECT_DETAIL = 0;

        let hr = unsafe {
            sys::WinBioCaptureSample(
                self.handle,
                sys::WINBIO_NO_PURPOSE_AVAILABLE,
                sys::WINBIO_DATA_FLAG_RAW,
                &mut unit_id,
                &mut sample,
                &mut sample_size,
                &mut reject_detail,
            )
        };

        match hr {
            sys::S_OK => {}
            sys::WINBIO_E_BAD_CAPTURE => {
                return Err(CaptureError::SampleRejected(RejectReason::from(reject_detail)));
            }
            sys::WINBIO_E_CANCELED => return Err(CaptureError::Canceled),
            sys::WINBIO_E_CAPTURE_ABORTED => {
                return Err(CaptureError::SessionError(
                    "the capture operation was aborted by the service".to_string(),
                ));
            }
            sys::WINBIO_E_DEVICE_BUSY => {
                return Err(CaptureError::SessionError(
                    "the sensor is busy with another operation".to_string(),
                ));
            }
            other => {
                return Err(CaptureError::SessionError(format!(
                    "WinBioCaptureSample failed with {}",
                    hresult_message(other)
                )));
            }
        }

        if sample.is_null() {
            return Err(CaptureError::SampleFormatError(
                "capture returned no sample container".to_string(),
            ));
        }

        let buffer = BirBuffer {
            ptr: sample,
            len: sample_size,
        };
        if buffer.len == 0 {
            return Err(CaptureError::SampleFormatError(
                "capture returned an empty sample container".to_string(),
            ));
        }

        Ok((buffer.as_bytes().to_vec(), unit_id))
    }
}

#[cfg(windows)]
impl Drop for Session {
    fn drop(&mut self) {
        // Nothing useful to do with a close failure here.
        let _ = unsafe { sys::WinBioCloseSession(self.handle) };
    }
}

/// Sample allocation owned by the biometric service, freed on drop.
#[cfg(windows)]
struct BirBuffer {
    ptr: *mut sys::WINBIO_BIR,
    len: usize,
}

#[cfg(windows)]
impl BirBuffer {
    fn as_bytes(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.ptr.cast::<u8>(), self.len) }
    }
}

#[cfg(windows)]
impl Drop for BirBuffer {
    fn drop(&mut self) {
        let _ = unsafe { sys::WinBioFree(self.ptr.cast()) };
    }
}

/// Cancels a blocking capture from a second thread once the deadline
/// passes. `WinBioCancel` is the only sanctioned way to interrupt a
/// synchronous `WinBioCaptureSample`.
#[cfg(windows)]
struct Watchdog {
    disarm_tx: mpsc::Sender<()>,
    thread: thread::JoinHandle<bool>,
}

#[cfg(windows)]
impl Watchdog {
    fn arm(session: sys::WINBIO_SESSION_HANDLE, timeout: Duration) -> Self {
        let (disarm_tx, disarm_rx) = mpsc::channel();
        let thread = thread::spawn(move || match disarm_rx.recv_timeout(timeout) {
            Err(mpsc::RecvTimeoutError::Timeout) => {
                debug!(?timeout, "Capture deadline passed, canceling session");
                let _ = unsafe { sys::WinBioCancel(session) };
                true
            }
            _ => false,
        });
        Self { disarm_tx, thread }
    }

    /// Stops the watchdog and reports whether it already canceled the
    /// session.
    fn disarm(self) -> bool {
        let _ = self.disarm_tx.send(());
        self.thread.join().unwrap_or(false)
    }
}

#[cfg(windows)]
fn hresult_message(hr: sys::HRESULT) -> String {
    format!("HRESULT 0x{:08X}", hr as u32)
}

#[cfg(windows)]
fn wide_to_string(wide: &[u16]) -> String {
    let len = wide.iter().position(|&c| c == 0).unwrap_or(wide.len());
    String::from_utf16_lossy(&wide[..len])
}
