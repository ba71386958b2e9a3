//! Proptest strategies shared by the engine's unit tests.

use proptest::prelude::*;
use proptest::sample::{select, subsequence};

use regfinder_core::{Activity, DataCategory, FactCategory, FactSet, Location, OrgSize, Sector};

/// Arbitrary fact sets over the known vocabulary, sprinkled with unknown
/// values and an occasionally missing size.
pub(crate) fn fact_set() -> impl Strategy<Value = FactSet> {
    (
        proptest::option::of(select(OrgSize::all())),
        subsequence(Sector::all(), 0..=4),
        subsequence(DataCategory::all(), 0..=DataCategory::all().len()),
        subsequence(Activity::all(), 0..=4),
        subsequence(Location::all(), 0..=2),
        proptest::collection::vec("[a-z]{3,6}_x", 0..3),
    )
        .prop_map(|(size, sectors, data, activities, locations, junk)| {
            let mut builder = FactSet::builder()
                .with_all(&sectors)
                .with_all(&data)
                .with_all(&activities)
                .with_all(&locations);
            if let Some(size) = size {
                builder = builder.with(size);
            }
            for value in &junk {
                builder = builder.with_raw(FactCategory::Activities, value);
            }
            builder.build()
        })
}
