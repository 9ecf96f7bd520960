//! libcurl-backed transport (blocking, one easy handle per request).

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use super::Transport;
use crate::config::DngetConfig;
use crate::error::{InstallError, Result};

#[derive(Debug, Clone)]
pub struct CurlTransport {
    connect_timeout: Duration,
    timeout: Duration,
}

impl CurlTransport {
    pub fn new(connect_timeout: Duration, timeout: Duration) -> Self {
        Self {
            connect_timeout,
            timeout,
        }
    }

    pub fn from_config(cfg: &DngetConfig) -> Self {
        Self::new(
            Duration::from_secs(cfg.connect_timeout_secs),
            Duration::from_secs(cfg.timeout_secs),
        )
    }

    fn easy(&self, url: &str) -> std::result::Result<curl::easy::Easy, curl::Error> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        easy.useragent(concat!("dnget/", env!("CARGO_PKG_VERSION")))?;
        Ok(easy)
    }
}

fn check_status(easy: &mut curl::easy::Easy, url: &str) -> Result<()> {
    let code = easy
        .response_code()
        .map_err(|e| InstallError::fetch(url, e))?;
    if !(200..300).contains(&code) {
        return Err(InstallError::fetch(url, format!("HTTP {code}")));
    }
    Ok(())
}

impl Transport for CurlTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        let mut body = Vec::new();
        let mut easy = self.easy(url).map_err(|e| InstallError::fetch(url, e))?;
        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(|e| InstallError::fetch(url, e))?;
            transfer
                .perform()
                .map_err(|e| InstallError::fetch(url, e))?;
        }
        check_status(&mut easy, url)?;
        Ok(body)
    }

    fn download(&self, url: &str, dest: &Path) -> Result<u64> {
        let mut file = File::create(dest).map_err(|e| InstallError::io(dest, e))?;
        let mut written = 0u64;
        let mut write_err = None;
        let mut easy = self.easy(url).map_err(|e| InstallError::fetch(url, e))?;
        easy.fail_on_error(true)
            .map_err(|e| InstallError::fetch(url, e))?;
        let performed = {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| match file.write_all(data) {
                    Ok(()) => {
                        written += data.len() as u64;
                        Ok(data.len())
                    }
                    Err(e) => {
                        tracing::warn!("archive write failed: {}", e);
                        write_err = Some(e);
                        Ok(0) // abort transfer
                    }
                })
                .map_err(|e| InstallError::fetch(url, e))?;
            transfer.perform()
        };
        if let Some(e) = write_err {
            return Err(InstallError::io(dest, e));
        }
        performed.map_err(|e| InstallError::fetch(url, e))?;
        check_status(&mut easy, url)?;
        file.flush().map_err(|e| InstallError::io(dest, e))?;
        Ok(written)
    }
}
