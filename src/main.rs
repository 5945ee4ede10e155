//! Demo: a season at Yellowstone.

use park_visits::lifecycle::{setup_tracing, ParkSystem};
use park_visits::model::{ParkCreate, VisitCreate, VisitorCreate};
use park_visits::validation::ValidationError;
use tracing::{info, warn};

fn main() -> Result<(), ValidationError> {
    setup_tracing();

    info!("Starting park visits demo");

    let mut system = ParkSystem::new();

    let yellowstone = system.create_park(ParkCreate::new("Yellowstone"))?;
    let ana = system.create_visitor(VisitorCreate::new("Ana"))?;
    let ben = system.create_visitor(VisitorCreate::new("Ben"))?;

    let span = tracing::info_span!("season");
    span.in_scope(|| -> Result<(), ValidationError> {
        system.create_visit(VisitCreate::new(ana, yellowstone, "June 1st", "June 5th"))?;
        system.create_visit(VisitCreate::new(ben, yellowstone, "July 2nd", "July 3rd"))?;
        system.create_visit(VisitCreate::new(ana, yellowstone, "August 4th", "August 6th"))?;
        Ok(())
    })?;

    // Rejected: no such day, nothing is recorded
    let impossible = VisitCreate::new(ben, yellowstone, "September 32nd", "October 1st");
    if let Err(e) = system.create_visit(impossible) {
        warn!(error = %e, "Visit rejected");
    }

    if let Some(park) = system.park(yellowstone) {
        info!(
            park = park.park().name(),
            total_visits = park.total_visits(),
            visitors = park.visitors().len(),
            best_visitor = park.best_visitor().map(|v| v.name()),
            "Park summary"
        );
    }

    if let Some(visitor) = system.visitor(ana) {
        let parks: Vec<&str> = visitor.parks().iter().map(|p| p.name()).collect();
        info!(
            visitor = visitor.visitor().name(),
            ?parks,
            at_yellowstone = visitor.total_visits_at_park(yellowstone),
            "Visitor summary"
        );
    }

    info!(most_visited = system.most_visited().map(|p| p.name()), "Demo completed");
    Ok(())
}
