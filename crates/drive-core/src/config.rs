//! Centralized configuration for the drive registry.
//!
//! Constants shared by the registry and the RPC backend.

/// Registry-level configuration.
pub struct DriveConfig;

impl DriveConfig {
    /// Id of the seeded root directory.
    pub const ROOT_ID: &'static str = "0";
    /// Seed data occupies ids 0 through 12.
    pub const FIRST_ALLOCATED_ID: u64 = 13;
    /// Placeholder size shown for freshly created folders.
    pub const NEW_FOLDER_SIZE: &'static str = "0 KB";
    /// Day/month/year, as the pt-BR locale renders short dates.
    pub const DATE_FORMAT: &'static str = "%d/%m/%Y";
}

/// RPC backend configuration.
pub struct RpcConfig;

impl RpcConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    /// 0 lets the OS pick a free port.
    pub const DEFAULT_PORT: u16 = 0;
    /// Prefix of the stdout line the front-end launcher reads the port from.
    pub const PORT_ANNOUNCE_PREFIX: &'static str = "RPC_PORT=";
}

/// Format a date the way entries display their `lastModified` field.
pub fn format_date(date: chrono::NaiveDate) -> String {
    date.format(DriveConfig::DATE_FORMAT).to_string()
}

/// Today's date in the local timezone, formatted for `lastModified`.
pub fn today_stamp() -> String {
    format_date(chrono::Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_date_is_day_first() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_date(date), "07/03/2024");
    }

    #[test]
    fn test_today_stamp_shape() {
        let stamp = today_stamp();
        assert_eq!(stamp.len(), 10);
        assert_eq!(stamp.matches('/').count(), 2);
    }
}
