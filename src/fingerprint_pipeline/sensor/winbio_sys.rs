//! Raw bindings to `winbio.dll`.
//!
//! Only the handful of entry points the capture backend needs are declared
//! here; names and layouts follow the Windows Biometric Framework headers.

#![allow(non_camel_case_types, non_snake_case, clippy::upper_case_acronyms)]

use std::ffi::c_void;

pub type HRESULT = i32;
pub type WINBIO_BIOMETRIC_TYPE = u32;
pub type WINBIO_POOL_TYPE = u32;
pub type WINBIO_SESSION_FLAGS = u32;
pub type WINBIO_SESSION_HANDLE = usize;
pub type WINBIO_UNIT_ID = u32;
pub type WINBIO_BIR_PURPOSE = u8;
pub type WINBIO_BIR_DATA_FLAGS = u8;
pub type WINBIO_REJECT_DETAIL = u32;

pub const WINBIO_TYPE_FINGERPRINT: WINBIO_BIOMETRIC_TYPE = 0x0000_0008;
pub const WINBIO_POOL_SYSTEM: WINBIO_POOL_TYPE = 1;
pub const WINBIO_FLAG_RAW: WINBIO_SESSION_FLAGS = 0x0000_0001;
pub const WINBIO_NO_PURPOSE_AVAILABLE: WINBIO_BIR_PURPOSE = 0;
pub const WINBIO_DATA_FLAG_RAW: WINBIO_BIR_DATA_FLAGS = 0x20;

pub const S_OK: HRESULT = 0;
pub const WINBIO_E_CANCELED: HRESULT = 0x8009_8004_u32 as HRESULT;
pub const WINBIO_E_CAPTURE_ABORTED: HRESULT = 0x8009_8006_u32 as HRESULT;
pub const WINBIO_E_BAD_CAPTURE: HRESULT = 0x8009_8008_u32 as HRESULT;
pub const WINBIO_E_DEVICE_BUSY: HRESULT = 0x8009_8010_u32 as HRESULT;

/// One entry of the BIR block table. Offsets are relative to the start of
/// the containing [`WINBIO_BIR`].
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WINBIO_BIR_DATA {
    pub Size: u32,
    pub Offset: u32,
}

/// Header of the biometric information record a raw capture returns. The
/// blocks it points at follow in the same allocation.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WINBIO_BIR {
    pub HeaderBlock: WINBIO_BIR_DATA,
    pub StandardDataBlock: WINBIO_BIR_DATA,
    pub VendorDataBlock: WINBIO_BIR_DATA,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WINBIO_VERSION {
    pub MajorVersion: u32,
    pub MinorVersion: u32,
}

#[repr(C)]
pub struct WINBIO_UNIT_SCHEMA {
    pub UnitId: WINBIO_UNIT_ID,
    pub PoolType: WINBIO_POOL_TYPE,
    pub BiometricFactor: WINBIO_BIOMETRIC_TYPE,
    pub SensorSubType: u32,
    pub Capabilities: u32,
    pub DeviceInstanceId: [u16; 256],
    pub Description: [u16; 256],
    pub Manufacturer: [u16; 256],
    pub Model: [u16; 256],
    pub SerialNumber: [u16; 256],
    pub FirmwareVersion: WINBIO_VERSION,
}

#[link(name = "winbio")]
unsafe extern "system" {
    pub fn WinBioOpenSession(
        Factor: WINBIO_BIOMETRIC_TYPE,
        PoolType: WINBIO_POOL_TYPE,
        Flags: WINBIO_SESSION_FLAGS,
        UnitArray: *const WINBIO_UNIT_ID,
        UnitCount: usize,
        DatabaseId: *const c_void,
        SessionHandle: *mut WINBIO_SESSION_HANDLE,
    ) -> HRESULT;

    pub fn WinBioCaptureSample(
        SessionHandle: WINBIO_SESSION_HANDLE,
        Purpose: WINBIO_BIR_PURPOSE,
        Flags: WINBIO_BIR_DATA_FLAGS,
        UnitId: *mut WINBIO_UNIT_ID,
        Sample: *mut *mut WINBIO_BIR,
        SampleSize: *mut usize,
        RejectDetail: *mut WINBIO_REJECT_DETAIL,
    ) -> HRESULT;

    pub fn WinBioCancel(SessionHandle: WINBIO_SESSION_HANDLE) -> HRESULT;

    pub fn WinBioCloseSession(SessionHandle: WINBIO_SESSION_HANDLE) -> HRESULT;

    pub fn WinBioFree(Address: *mut c_void) -> HRESULT;

    pub fn WinBioEnumBiometricUnits(
        Factor: WINBIO_BIOMETRIC_TYPE,
        UnitSchemaArray: *mut *mut WINBIO_UNIT_SCHEMA,
        UnitCount: *mut usize,
    ) -> HRESULT;
}
