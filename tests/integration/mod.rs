//! End-to-end compilation scenarios: full statements exercising naming
//! stability, parameter deduplication, scoping, and build determinism.

mod query_building_tests;
