//! Whole-document tests against a realistic fixture.

mod fixture;
