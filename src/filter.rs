//! Input filter: discards malformed vans and packages before planning.

use std::ops::Deref;

use crate::models::{Package, Van};
use crate::warnings::{Warning, WarningSink};

/// Filters candidate vans and packages down to the valid subsets.
///
/// A van survives if its capacity and fuel rate are positive; a package
/// survives if its weight is positive and its pickup and delivery
/// locations differ. Survivors keep their relative input order, and the
/// pass is idempotent.
///
/// Every rejected package is reported through the sink as
/// [`Warning::InvalidPackage`]; rejected vans are dropped silently.
///
/// # Examples
///
/// ```
/// use van_routing::filter::filter_valid_input;
/// use van_routing::models::{Package, Van};
/// use van_routing::warnings::null_sink;
///
/// let vans = vec![Van::new(10.0, 10.0), Van::new(0.0, 5.0)];
/// let packages = vec![Package::new(-1, 5, 4.0), Package::new(3, 3, 2.0)];
///
/// let (vans, packages) = filter_valid_input(&vans, &packages, &null_sink());
/// assert_eq!(vans.len(), 1);
/// assert_eq!(packages.len(), 1);
/// assert_eq!(packages[0].pickup(), -1);
/// ```
pub fn filter_valid_input(
    vans: &[Van],
    packages: &[Package],
    sink: &WarningSink,
) -> (Vec<Van>, Vec<Package>) {
    let valid_vans = vans.iter().copied().filter(Van::is_valid).collect();

    let mut valid_packages = Vec::with_capacity(packages.len());
    for package in packages {
        if package.is_valid() {
            valid_packages.push(*package);
        } else {
            sink.deref()(&Warning::InvalidPackage { package: *package });
        }
    }

    (valid_vans, valid_packages)
}
