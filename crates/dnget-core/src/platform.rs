//! Runtime identifier (`{platform}-{arch}`) resolution from raw OS/arch names.
//!
//! Musl-based Linux is not detected: the host OS name does not report the
//! libc flavor, so it resolves to `linux` unless `linux-musl` is passed
//! explicitly.

use std::fmt;

use crate::error::InstallError;

/// Host OS name as reported by the standard library (`linux`, `macos`, `windows`, ...).
pub const HOST_OS: &str = std::env::consts::OS;
/// Host architecture as reported by the standard library (`x86_64`, `aarch64`, ...).
pub const HOST_ARCH: &str = std::env::consts::ARCH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Osx,
    Freebsd,
    Rhel6,
    LinuxMusl,
    Linux,
    Win,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Osx => "osx",
            Platform::Freebsd => "freebsd",
            Platform::Rhel6 => "rhel.6",
            Platform::LinuxMusl => "linux-musl",
            Platform::Linux => "linux",
            Platform::Win => "win",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    Arm64,
    S390x,
    Ppc64le,
    Loongarch64,
    X64,
}

impl Arch {
    pub fn as_str(self) -> &'static str {
        match self {
            Arch::Arm64 => "arm64",
            Arch::S390x => "s390x",
            Arch::Ppc64le => "ppc64le",
            Arch::Loongarch64 => "loongarch64",
            Arch::X64 => "x64",
        }
    }
}

/// Canonical `{platform}-{arch}` pair used to pick a file from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeIdentifier {
    pub platform: Platform,
    pub arch: Arch,
}

impl fmt::Display for RuntimeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.platform.as_str(), self.arch.as_str())
    }
}

/// Map a raw OS name (case-insensitive) to its platform part.
pub fn resolve_platform(raw_os: &str) -> Result<Platform, InstallError> {
    match raw_os.to_ascii_lowercase().as_str() {
        "osx" | "macos" => Ok(Platform::Osx),
        "freebsd" => Ok(Platform::Freebsd),
        "rhel.6" => Ok(Platform::Rhel6),
        "linux-musl" => Ok(Platform::LinuxMusl),
        "linux" => Ok(Platform::Linux),
        "win" | "windows" => Ok(Platform::Win),
        _ => Err(InstallError::UnsupportedPlatform {
            os: raw_os.to_string(),
        }),
    }
}

/// Map a raw architecture name to its arch part. Anything unrecognized
/// (including `x86`, `amd64` and typos) becomes `x64`; this never fails.
pub fn resolve_arch(raw_arch: &str) -> Arch {
    match raw_arch.to_ascii_lowercase().as_str() {
        "arm64" | "aarch64" => Arch::Arm64,
        "s390x" => Arch::S390x,
        "ppc64le" => Arch::Ppc64le,
        "loongarch64" => Arch::Loongarch64,
        _ => Arch::X64,
    }
}

pub fn resolve_rid(raw_os: &str, raw_arch: &str) -> Result<RuntimeIdentifier, InstallError> {
    let platform = resolve_platform(raw_os).map_err(|e| {
        InstallError::UnresolvedRuntimeIdentifier {
            os: raw_os.to_string(),
            arch: raw_arch.to_string(),
            source: Box::new(e),
        }
    })?;
    Ok(RuntimeIdentifier {
        platform,
        arch: resolve_arch(raw_arch),
    })
}
