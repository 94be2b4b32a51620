//! Frontend/backend linking.

use crate::scaffold::{Backend, Frontend, ServiceReference, ServiceRole, ServiceSpec};

/// Classify every service and connect each frontend to every backend.
///
/// Services without a frontend marker become backends, except those on
/// port 0, which are listed as frontends under an empty marker. After
/// linking each declared frontend lists all backends and each backend lists
/// all frontends, both in service order. A port-0 frontend keeps an empty
/// backend list.
pub fn link_services(services: &mut [ServiceSpec]) {
    let mut promoted = vec![false; services.len()];
    for (idx, svc) in services.iter_mut().enumerate() {
        if svc.is_frontend() {
            continue;
        }
        if svc.port == Some(0) {
            promoted[idx] = true;
            svc.role = Some(ServiceRole::Frontend(Frontend::default()));
        } else {
            svc.role = Some(ServiceRole::Backend(Backend::default()));
        }
    }

    let frontends: Vec<ServiceReference> = services
        .iter()
        .filter(|s| s.is_frontend())
        .map(|s| ServiceReference::new(&s.name))
        .collect();
    let backends: Vec<ServiceReference> = services
        .iter()
        .filter(|s| s.is_backend())
        .map(|s| ServiceReference::new(&s.name))
        .collect();

    for (svc, promoted) in services.iter_mut().zip(promoted) {
        match &mut svc.role {
            Some(ServiceRole::Frontend(_)) if promoted => {}
            Some(ServiceRole::Frontend(f)) => f.backends = backends.clone(),
            Some(ServiceRole::Backend(b)) => b.frontends = frontends.clone(),
            None => {}
        }
    }

    tracing::debug!(
        frontends = frontends.len(),
        backends = backends.len(),
        "services linked"
    );
}
