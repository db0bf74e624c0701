//! One `impl VmwareClient` block per resource family.

mod catalog;
mod clusters;
mod director_sites;
mod oidc;
mod pvdcs;
mod vdcs;
