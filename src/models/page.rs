use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::error::AppError;

/// Fields a listing can be ordered by, named as they appear in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    ParkingSpotNumber,
    LicensePlateCar,
    BrandCar,
    ModelCar,
    ColorCar,
    RegistrationDate,
    ResponsibleName,
    Apartment,
    Block,
}

impl SortField {
    pub fn column(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::ParkingSpotNumber => "parking_spot_number",
            SortField::LicensePlateCar => "license_plate_car",
            SortField::BrandCar => "brand_car",
            SortField::ModelCar => "model_car",
            SortField::ColorCar => "color_car",
            SortField::RegistrationDate => "registration_date",
            SortField::ResponsibleName => "responsible_name",
            SortField::Apartment => "apartment",
            SortField::Block => "block",
        }
    }
}

impl FromStr for SortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortField::Id),
            "parkingSpotNumber" => Ok(SortField::ParkingSpotNumber),
            "licensePlateCar" | "licensePlaceCar" => Ok(SortField::LicensePlateCar),
            "brandCar" => Ok(SortField::BrandCar),
            "modelCar" => Ok(SortField::ModelCar),
            "colorCar" => Ok(SortField::ColorCar),
            "registrationDate" => Ok(SortField::RegistrationDate),
            "responsibleName" => Ok(SortField::ResponsibleName),
            "apartment" => Ok(SortField::Apartment),
            "block" => Ok(SortField::Block),
            other => Err(AppError::Validation(format!("Unknown sort field: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_sql(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

impl FromStr for Direction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            other => Err(AppError::Validation(format!("Unknown sort direction: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: Direction,
}

impl Default for Sort {
    fn default() -> Self {
        Self {
            field: SortField::Apartment,
            direction: Direction::Desc,
        }
    }
}

impl FromStr for Sort {
    type Err = AppError;

    /// Parses `field` or `field,direction`. A missing direction means ascending.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = match s.split_once(',') {
            Some((field, direction)) => (field, direction.parse()?),
            None => (s, Direction::Asc),
        };
        Ok(Sort {
            field: field.trim().parse()?,
            direction,
        })
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field.column(), self.direction.as_sql())
    }
}

/// Raw listing query string: `?page=0&size=10&sort=apartment,desc&sort=block`.
///
/// `page` and `size` stay strings so that garbage falls back to the defaults
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    pub size: Option<String>,
    #[serde(default)]
    pub sort: Vec<String>,
}

/// A normalized request for one page of records.
///
/// `sort` is applied left to right; later entries only break ties of the
/// earlier ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort: Vec<Sort>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: vec![Sort::default()],
        }
    }
}

impl PageRequest {
    /// Unparsable or negative pages become 0, unparsable sizes or sizes below
    /// 1 fall back to the default and sizes above the maximum are capped.
    pub fn from_params(params: PageParams) -> Result<Self, AppError> {
        let page = params
            .page
            .as_deref()
            .and_then(|v| v.trim().parse::<i64>().ok())
            .unwrap_or(0)
            .clamp(0, i64::from(u32::MAX)) as u32;
        let size = match params.size.as_deref().and_then(|v| v.trim().parse::<i64>().ok()) {
            Some(size) if size >= 1 => size.min(i64::from(MAX_PAGE_SIZE)) as u32,
            _ => DEFAULT_PAGE_SIZE,
        };
        let mut sort = params
            .sort
            .iter()
            .map(|spec| spec.trim())
            .filter(|spec| !spec.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Sort>, _>>()?;
        if sort.is_empty() {
            sort.push(Sort::default());
        }
        Ok(Self { page, size, sort })
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }

    /// The sort list as an SQL ORDER BY list, e.g. `block ASC, apartment DESC`.
    pub fn order_by(&self) -> String {
        self.sort
            .iter()
            .map(Sort::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One page of results plus the totals needed to navigate the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u32,
    pub size: u32,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        let size = u64::from(request.size.max(1));
        let total_pages = total_elements.div_ceil(size);
        let number_of_elements = content.len();
        Self {
            number_of_elements,
            empty: content.is_empty(),
            content,
            total_elements,
            total_pages,
            number: request.page,
            size: request.size,
            first: request.page == 0,
            last: u64::from(request.page) + 1 >= total_pages,
        }
    }
}
