use std::{fmt, fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::InputError, geometry::Coords2D};

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

pub type Commuter = Point;
pub type Cab = Point;
pub type Destination = Point;

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl Coords2D for Point {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl From<nalgebra::Vector2<f64>> for Point {
    fn from(value: nalgebra::Vector2<f64>) -> Self {
        Point {
            x: value.x,
            y: value.y,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses `x,y` where both components are integers.
impl FromStr for Point {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',').map(|part| part.trim().parse::<i64>());
        match (parts.next(), parts.next()) {
            (Some(Ok(x)), Some(Ok(y))) => Ok(Point::new(x as f64, y as f64)),
            _ => Err(InputError::InvalidCoordinateFormat(s.to_string())),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct ProblemDto {
    pub commuters: Vec<Commuter>,
    pub cabs: Vec<Cab>,
    pub destination: Destination,
}

impl ProblemDto {
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => InputError::NotFound(path.to_owned()),
            _ => InputError::Io {
                path: path.to_owned(),
                source: e,
            },
        })?;
        Self::parse(&content)
    }

    /// Line 1 is `m n`, then `m` commuters, `n` cabs and the destination.
    pub fn parse(content: &str) -> Result<Self, InputError> {
        let lines: Vec<&str> = content.lines().collect();
        let header = *lines.first().ok_or(InputError::Empty)?;

        let mut counts = header.split_whitespace().map(str::parse::<usize>);
        let (m, n) = match (counts.next(), counts.next()) {
            (Some(Ok(m)), Some(Ok(n))) => (m, n),
            _ => return Err(InputError::MalformedHeader(header.to_string())),
        };

        let total = lines.len();
        if total < m.saturating_add(1) {
            return Err(InputError::InsufficientCommuterLocations {
                expected: m,
                found: total - 1,
            });
        }
        if total < m.saturating_add(n).saturating_add(1) {
            return Err(InputError::InsufficientCabLocations {
                expected: n,
                found: total - m - 1,
            });
        }
        if total < m + n + 2 {
            return Err(InputError::MissingDestination);
        }

        let commuters = lines[1..=m]
            .iter()
            .map(|line| line.parse())
            .collect::<Result<Vec<Commuter>, _>>()?;
        let cabs = lines[m + 1..=m + n]
            .iter()
            .map(|line| line.parse())
            .collect::<Result<Vec<Cab>, _>>()?;
        let destination = lines[m + n + 1].parse()?;

        Ok(ProblemDto {
            commuters,
            cabs,
            destination,
        })
    }

    pub fn to_input_string(&self) -> String {
        let mut out = format!("{} {}\n", self.commuters.len(), self.cabs.len());
        for p in self
            .commuters
            .iter()
            .chain(self.cabs.iter())
            .chain(std::iter::once(&self.destination))
        {
            out.push_str(&format!("{},{}\n", p.x, p.y));
        }
        out
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GroupDto {
    pub centroid: Point,
    pub points: Vec<Point>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PickupDto {
    pub group: usize,
    pub cab: usize,
    pub cab_location: Cab,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SolutionDto {
    pub solver_name: String,
    /// `None` when no route could be found.
    pub total_distance: Option<f64>,
    pub route: Vec<PickupDto>,
    pub groups: Vec<GroupDto>,
}
