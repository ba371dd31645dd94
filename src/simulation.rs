// Delivery simulation: plan a route, check stock and write the report

use std::io::Write;
use tracing::{info, warn};

use crate::algorithms::nearest_neighbor::NearestNeighborPlanner;
use crate::algorithms::RoutePlanner;
use crate::config::DeliveryConfig;
use crate::error::Result;
use crate::models::{Inventory, Location, Quantity};
use crate::utils::visualize::plot_route;

/// What a simulation run produced, alongside the written report
#[derive(Debug, Clone, PartialEq)]
pub struct DeliverySummary {
    /// Visited locations, start first; empty when planning failed
    pub route: Vec<Location>,

    /// Outcome of the stock requirement check, if one was configured
    pub requirement_met: Option<bool>,

    /// Inventory levels at the end of the run, in stocking order
    pub inventory: Vec<(String, Quantity)>,
}

/// Run one simulation and write the report to `out`
///
/// A route planning failure is reported and the run carries on with an empty route.
/// Only failures to write the report are returned as errors.
pub fn simulate_deliveries<W: Write>(
    config: &DeliveryConfig,
    out: &mut W,
) -> Result<DeliverySummary> {
    writeln!(out, "Simulating Smart Delivery System...")?;

    let planner = NearestNeighborPlanner::with_metric(config.metric);
    let route = match planner.find_optimal_route(config.start, &config.deliveries) {
        Ok(route) => {
            info!(
                "Planned {} deliveries from {} ({:?} distance {:.4})",
                route.stops().len(),
                route.start(),
                planner.metric(),
                route.total_distance(planner.metric())
            );
            if let Some(path) = &config.plot_output {
                match plot_route(path, &route) {
                    Ok(()) => info!("Route plot saved to {}", path.display()),
                    Err(e) => warn!("Could not plot route: {}", e),
                }
            }
            route.into_locations()
        }
        Err(e) => {
            warn!("Route planning failed: {}", e);
            writeln!(out, "Error optimizing route: {}", e)?;
            Vec::new()
        }
    };

    writeln!(out, "Optimal route found:")?;
    for location in &route {
        writeln!(out, "Delivery to location: {}", location)?;
    }

    let inventory = config.inventory();
    info!(
        "Inventory holds {} units across {} items",
        inventory.total_units(),
        inventory.len()
    );
    let requirement_met = match &config.requirement {
        Some(required) => Some(report_requirement(
            &inventory,
            &required.item,
            required.quantity,
            out,
        )?),
        None => None,
    };

    writeln!(out, "Current Inventory Status:")?;
    let status = inventory.status();
    for (item, quantity) in &status {
        writeln!(out, "{}: {} units", item, quantity)?;
    }

    Ok(DeliverySummary {
        route,
        requirement_met,
        inventory: status
            .into_iter()
            .map(|(item, quantity)| (item.to_owned(), quantity))
            .collect(),
    })
}

fn report_requirement<W: Write>(
    inventory: &Inventory,
    item: &str,
    quantity: Quantity,
    out: &mut W,
) -> Result<bool> {
    let available = inventory.has_at_least(item, quantity);
    if available {
        writeln!(out, "{} of {} is available for delivery.", quantity, item)?;
    } else {
        warn!(
            "Only {} of {} in stock, {} required",
            inventory.quantity_of(item),
            item,
            quantity
        );
        writeln!(out, "Insufficient {} in inventory.", item)?;
    }
    Ok(available)
}
