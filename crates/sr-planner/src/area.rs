//! Named rectangular service areas.
//!
//! Areas are checked in order and the first match wins, so overlapping
//! boxes resolve to whichever was listed first.

use sr_core::{BoundingBox, GeoPoint};

use crate::error::{Endpoint, PlannerError, PlannerResult};

/// A named region the planner has network coverage for.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceArea {
    pub name: String,
    pub bbox: BoundingBox,
}

impl ServiceArea {
    pub fn new(name: impl Into<String>, bbox: BoundingBox) -> Self {
        Self { name: name.into(), bbox }
    }

    /// `true` if `text` mentions this area's name, ignoring case.
    pub fn is_named_in(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.name.to_lowercase())
    }
}

/// Ordered list of service areas.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ServiceAreas {
    areas: Vec<ServiceArea>,
}

impl ServiceAreas {
    pub fn new(areas: Vec<ServiceArea>) -> Self {
        Self { areas }
    }

    /// Leeds, then Birmingham.
    pub fn uk_default() -> Self {
        Self::new(vec![
            ServiceArea::new(
                "Leeds",
                BoundingBox::new(53.6989675, -1.8004214, 53.9458715, -1.2903516),
            ),
            ServiceArea::new(
                "Birmingham",
                BoundingBox::new(52.381053, -2.0336486, 52.6087058, -1.7288417),
            ),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceArea> + '_ {
        self.areas.iter()
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// First area whose box contains `point` (boundaries inclusive).
    pub fn locate(&self, point: GeoPoint) -> Option<&ServiceArea> {
        self.areas.iter().find(|a| a.bbox.contains(point))
    }

    /// `(in_area, area_name)` for `point`.
    pub fn locate_service_area(&self, point: GeoPoint) -> (bool, Option<&str>) {
        match self.locate(point) {
            Some(area) => (true, Some(area.name.as_str())),
            None => (false, None),
        }
    }

    /// The area both endpoints fall in.
    ///
    /// # Errors
    ///
    /// - [`PlannerError::OutOfServiceArea`] if either point is in no area
    ///   (origin checked first).
    /// - [`PlannerError::AreaMismatch`] if they fall in different areas.
    pub fn require_same_area(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> PlannerResult<&ServiceArea> {
        let o = self.locate(origin).ok_or(PlannerError::OutOfServiceArea {
            which: Endpoint::Origin,
            point: origin,
        })?;
        let d = self.locate(destination).ok_or(PlannerError::OutOfServiceArea {
            which: Endpoint::Destination,
            point: destination,
        })?;
        if o.name != d.name {
            return Err(PlannerError::AreaMismatch {
                origin: o.name.clone(),
                destination: d.name.clone(),
            });
        }
        Ok(o)
    }
}

impl Default for ServiceAreas {
    fn default() -> Self {
        Self::uk_default()
    }
}
