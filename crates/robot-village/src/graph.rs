//! Road graph representation and builder.
//!
//! # Data layout
//!
//! Location names are interned into dense [`LocationId`]s in first-seen
//! order.  Roads are stored in **Compressed Sparse Row (CSR)** format: the
//! neighbours of location `l` occupy
//!
//! ```text
//! road_to[ loc_out_start[l] .. loc_out_start[l+1] ]
//! ```
//!
//! Within that slice neighbours keep the order in which their roads were
//! added.  Duplicate roads are kept as duplicate entries; they only skew the
//! random robot's choice, never reachability.

use robot_core::LocationId;

use crate::{VillageError, VillageResult};

#[cfg(feature = "fx-hash")]
type NameIndex = rustc_hash::FxHashMap<String, LocationId>;
#[cfg(not(feature = "fx-hash"))]
type NameIndex = std::collections::HashMap<String, LocationId>;

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// Undirected road graph in CSR format plus a name index.
///
/// Immutable once built; share it by reference.  Do not construct directly;
/// use [`RoadGraph::from_roads`] or [`RoadGraphBuilder`].
#[derive(Debug, Clone)]
pub struct RoadGraph {
    /// Location names, indexed by `LocationId`.
    names: Vec<String>,

    name_index: NameIndex,

    /// CSR row pointer.  Length = `location_count + 1`.
    pub loc_out_start: Vec<u32>,

    /// Destination of each directed road, grouped by source location.
    pub road_to: Vec<LocationId>,
}

impl RoadGraph {
    /// Build a graph from `"A-B"` road descriptors.
    ///
    /// Every descriptor adds both `A → B` and `B → A`.
    ///
    /// ```
    /// use robot_village::RoadGraph;
    ///
    /// let graph = RoadGraph::from_roads(&["Farm-Shop", "Shop-Town Hall"]).unwrap();
    /// let shop = graph.location("Shop").unwrap();
    /// assert_eq!(graph.location_count(), 3);
    /// assert_eq!(graph.degree(shop), 2);
    /// ```
    pub fn from_roads<S: AsRef<str>>(roads: &[S]) -> VillageResult<Self> {
        let mut b = RoadGraphBuilder::with_capacity(roads.len() * 2, roads.len() * 2);
        for road in roads {
            b.add_descriptor(road.as_ref())?;
        }
        Ok(b.build())
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn location_count(&self) -> usize {
        self.names.len()
    }

    /// Number of directed roads (twice the number of descriptors).
    pub fn road_count(&self) -> usize {
        self.road_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `true` if `id` names a location of this graph.
    #[inline]
    pub fn contains(&self, id: LocationId) -> bool {
        id.index() < self.names.len()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Neighbours of `id` in road-insertion order.
    ///
    /// Empty for ids outside the graph (including `LocationId::INVALID`).
    #[inline]
    pub fn neighbors(&self, id: LocationId) -> &[LocationId] {
        if !self.contains(id) {
            return &[];
        }
        let start = self.loc_out_start[id.index()] as usize;
        let end   = self.loc_out_start[id.index() + 1] as usize;
        &self.road_to[start..end]
    }

    #[inline]
    pub fn degree(&self, id: LocationId) -> usize {
        self.neighbors(id).len()
    }

    /// `true` if a road leads directly from `from` to `to`.
    #[inline]
    pub fn is_road(&self, from: LocationId, to: LocationId) -> bool {
        self.neighbors(from).contains(&to)
    }

    /// All location ids, in first-seen order.
    pub fn locations(&self) -> impl Iterator<Item = LocationId> + '_ {
        (0..self.names.len()).map(|i| LocationId(i as u32))
    }

    // ── Names ─────────────────────────────────────────────────────────────

    pub fn location(&self, name: &str) -> Option<LocationId> {
        self.name_index.get(name).copied()
    }

    /// Like [`location`](Self::location) but reports unknown names as errors.
    pub fn require(&self, name: &str) -> VillageResult<LocationId> {
        self.location(name)
            .ok_or_else(|| VillageError::UnknownLocation(name.to_owned()))
    }

    pub fn name(&self, id: LocationId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    /// Name for log lines; never fails.
    pub fn display_name(&self, id: LocationId) -> &str {
        self.name(id).unwrap_or("<nowhere>")
    }
}

// ── RoadGraphBuilder ──────────────────────────────────────────────────────────

/// Construct a [`RoadGraph`] incrementally, then call [`build`](Self::build).
///
/// ```
/// use robot_village::RoadGraphBuilder;
///
/// let mut b = RoadGraphBuilder::new();
/// let a = b.add_location("A");
/// let c = b.add_location("C");
/// b.add_road(a, c).unwrap();
/// let graph = b.build();
/// assert_eq!(graph.road_count(), 2); // both directions
/// ```
#[derive(Debug, Default)]
pub struct RoadGraphBuilder {
    names:      Vec<String>,
    name_index: NameIndex,
    raw_roads:  Vec<RawRoad>,
}

#[derive(Debug, Clone, Copy)]
struct RawRoad {
    from: LocationId,
    to:   LocationId,
}

impl RoadGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(locations: usize, roads: usize) -> Self {
        Self {
            names:      Vec::with_capacity(locations),
            name_index: NameIndex::default(),
            raw_roads:  Vec::with_capacity(roads),
        }
    }

    /// Intern `name`, returning its existing id if already known.
    pub fn add_location(&mut self, name: &str) -> LocationId {
        if let Some(&id) = self.name_index.get(name) {
            return id;
        }
        let id = LocationId(self.names.len() as u32);
        self.names.push(name.to_owned());
        self.name_index.insert(name.to_owned(), id);
        id
    }

    /// Add a one-way road.  The village itself only has two-way roads; this
    /// exists for synthetic test graphs.
    pub fn add_directed_road(&mut self, from: LocationId, to: LocationId) -> VillageResult<()> {
        for id in [from, to] {
            if id.index() >= self.names.len() {
                return Err(VillageError::UnknownLocationId(id));
            }
        }
        self.raw_roads.push(RawRoad { from, to });
        Ok(())
    }

    /// Add roads in **both directions**.
    pub fn add_road(&mut self, a: LocationId, b: LocationId) -> VillageResult<()> {
        self.add_directed_road(a, b)?;
        self.add_directed_road(b, a)
    }

    /// Parse an `"A-B"` descriptor, interning both names, and add the road.
    pub fn add_descriptor(&mut self, descriptor: &str) -> VillageResult<(LocationId, LocationId)> {
        let (a, b) = parse_descriptor(descriptor)?;
        let a = self.add_location(a);
        let b = self.add_location(b);
        self.add_road(a, b)?;
        Ok((a, b))
    }

    pub fn location_count(&self) -> usize { self.names.len() }
    pub fn road_count(&self) -> usize { self.raw_roads.len() }

    /// Consume the builder and produce a [`RoadGraph`].
    pub fn build(self) -> RoadGraph {
        let location_count = self.names.len();

        // Stable sort: neighbours keep their insertion order per location.
        let mut raw = self.raw_roads;
        raw.sort_by_key(|r| r.from.0);

        let road_to: Vec<LocationId> = raw.iter().map(|r| r.to).collect();

        let mut loc_out_start = vec![0u32; location_count + 1];
        for r in &raw {
            loc_out_start[r.from.index() + 1] += 1;
        }
        for i in 1..=location_count {
            loc_out_start[i] += loc_out_start[i - 1];
        }
        debug_assert_eq!(loc_out_start[location_count] as usize, road_to.len());

        RoadGraph {
            names: self.names,
            name_index: self.name_index,
            loc_out_start,
            road_to,
        }
    }
}

/// Split `"A-B"` into its two names.
fn parse_descriptor(descriptor: &str) -> VillageResult<(&str, &str)> {
    let mut parts = descriptor.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) if !a.is_empty() && !b.is_empty() => Ok((a, b)),
        _ => Err(VillageError::MalformedRoad(descriptor.to_owned())),
    }
}
