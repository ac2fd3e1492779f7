pub const API_NAME: &str = "[parking-control-api]";

pub const BASE_PATH: &str = "/parking-spot";

pub const LICENSE_PLATE_IN_USE: &str = "Licence Place Car in use!";
pub const PARKING_SPOT_NUMBER_IN_USE: &str = "Parking Spot Number in use!";
pub const APARTMENT_AND_BLOCK_IN_USE: &str = "Apartment and Block in use!";
pub const PARKING_SPOT_NOT_FOUND: &str = "Parking Spot not found!";
pub const PARKING_SPOT_DELETED: &str = "Parking Spot deleted successfully!";

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 2000;

// Preflight cache lifetime for CORS, in seconds.
pub const CORS_MAX_AGE_SECS: u64 = 3600;
