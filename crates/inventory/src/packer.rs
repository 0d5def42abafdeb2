//! Shipment packing: allocated quantities → mass-bounded batches.
//!
//! Packing runs in three steps:
//!
//! 1. **Split** each allocation into packages of at most
//!    `floor(max_batch_mass / unit_mass)` units.
//! 2. **Order** the packages (stable sort; the key depends on the policy).
//! 3. **Bin-pack** greedily into batches whose summed mass never exceeds the cap.
//!
//! Under [`PackingPolicy::SplitAcrossBatches`] packages are ordered by unit mass,
//! heaviest first, and a package that overflows the open batch contributes as
//! many whole units as still fit before the batch is committed; the remainder
//! seeds the next batch. Under [`PackingPolicy::FreshBatch`] packages are
//! ordered by total mass, lightest first, and an overflowing package always
//! opens a new batch whole.

use stockline_core::ProductId;
use stockline_events::ShippedItem;

use crate::config::{EngineConfig, PackingPolicy};

/// Quantity of one product committed to an order, with its unit mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Allocation {
    pub product_id: ProductId,
    pub quantity: u64,
    pub unit_mass_g: f64,
}

/// A committed group of shipped lines.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentBatch {
    pub items: Vec<ShippedItem>,
    pub mass_g: f64,
}

/// Slice of a single allocation, never heavier than the batch cap.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Package {
    product_id: ProductId,
    quantity: u64,
    unit_mass_g: f64,
    total_mass_g: f64,
}

impl Package {
    fn new(product_id: ProductId, quantity: u64, unit_mass_g: f64) -> Self {
        Self {
            product_id,
            quantity,
            unit_mass_g,
            total_mass_g: unit_mass_g * quantity as f64,
        }
    }

    fn with_quantity(&self, quantity: u64) -> Self {
        Self::new(self.product_id, quantity, self.unit_mass_g)
    }
}

#[derive(Debug, Default)]
struct OpenBatch {
    packages: Vec<Package>,
    mass_g: f64,
}

impl OpenBatch {
    fn seeded(package: Package) -> Self {
        let mut batch = Self::default();
        batch.push(package);
        batch
    }

    fn push(&mut self, package: Package) {
        self.mass_g += package.total_mass_g;
        self.packages.push(package);
    }

    fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    fn commit(self, batches: &mut Vec<ShipmentBatch>) {
        if self.is_empty() {
            return;
        }
        batches.push(ShipmentBatch {
            items: self
                .packages
                .iter()
                .map(|p| ShippedItem::new(p.product_id, p.quantity))
                .collect(),
            mass_g: self.mass_g,
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipmentPacker {
    max_batch_mass_g: f64,
    policy: PackingPolicy,
}

impl Default for ShipmentPacker {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl ShipmentPacker {
    pub fn new(max_batch_mass_g: f64, policy: PackingPolicy) -> Self {
        Self {
            max_batch_mass_g,
            policy,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.max_batch_mass_g, config.packing)
    }

    pub fn max_batch_mass_g(&self) -> f64 {
        self.max_batch_mass_g
    }

    pub fn policy(&self) -> PackingPolicy {
        self.policy
    }

    /// Group `allocations` into batches, in commit order.
    pub fn pack(&self, allocations: &[Allocation]) -> Vec<ShipmentBatch> {
        let mut packages: Vec<Package> = allocations
            .iter()
            .flat_map(|a| self.split(a))
            .collect();

        match self.policy {
            PackingPolicy::SplitAcrossBatches => {
                packages.sort_by(|a, b| b.unit_mass_g.total_cmp(&a.unit_mass_g));
                self.fill_splitting(packages)
            }
            PackingPolicy::FreshBatch => {
                packages.sort_by(|a, b| a.total_mass_g.total_cmp(&b.total_mass_g));
                self.fill_fresh(packages)
            }
        }
    }

    fn split(&self, allocation: &Allocation) -> Vec<Package> {
        // The catalog rejects units heavier than the cap, so this is >= 1.
        let per_package = ((self.max_batch_mass_g / allocation.unit_mass_g).floor() as u64).max(1);

        let mut packages = Vec::new();
        let mut remaining = allocation.quantity;
        while remaining > 0 {
            let quantity = per_package.min(remaining);
            packages.push(Package::new(
                allocation.product_id,
                quantity,
                allocation.unit_mass_g,
            ));
            remaining -= quantity;
        }
        packages
    }

    fn fill_splitting(&self, packages: Vec<Package>) -> Vec<ShipmentBatch> {
        let mut batches = Vec::new();
        let mut open = OpenBatch::default();

        for package in packages {
            if open.mass_g + package.total_mass_g <= self.max_batch_mass_g {
                open.push(package);
                continue;
            }

            let room = (self.max_batch_mass_g - open.mass_g).max(0.0);
            let fitted = ((room / package.unit_mass_g).floor() as u64)
                .min(package.quantity.saturating_sub(1));

            if fitted > 0 {
                open.push(package.with_quantity(fitted));
                open.commit(&mut batches);
                open = OpenBatch::seeded(package.with_quantity(package.quantity - fitted));
            } else {
                open.commit(&mut batches);
                open = OpenBatch::seeded(package);
            }
        }

        open.commit(&mut batches);
        batches
    }

    fn fill_fresh(&self, packages: Vec<Package>) -> Vec<ShipmentBatch> {
        let mut batches = Vec::new();
        let mut open = OpenBatch::default();

        for package in packages {
            if open.mass_g + package.total_mass_g <= self.max_batch_mass_g {
                open.push(package);
            } else {
                open.commit(&mut batches);
                open = OpenBatch::seeded(package);
            }
        }

        open.commit(&mut batches);
        batches
    }
}
