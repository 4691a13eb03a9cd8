//! Applying a trust decision to a libcurl handle.

use ::curl::easy::Easy;

use super::TrustDecision;

impl TrustDecision {
    /// Configures certificate checking on `easy`.
    ///
    /// A pool is installed as an in-memory CA bundle, replacing the default
    /// store for this handle.
    pub fn apply_to_curl(&self, easy: &mut Easy) -> Result<(), ::curl::Error> {
        easy.ssl_verify_peer(!self.skip_verify)?;
        easy.ssl_verify_host(!self.skip_verify)?;
        if let Some(pool) = &self.pool {
            easy.ssl_cainfo_blob(pool.to_pem().as_bytes())?;
        }
        Ok(())
    }

    /// New libcurl handle with this decision applied.
    pub fn curl_handle(&self) -> Result<Easy, ::curl::Error> {
        let mut easy = Easy::new();
        self.apply_to_curl(&mut easy)?;
        Ok(easy)
    }
}
