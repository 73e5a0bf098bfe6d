//! Services offered on the marketing pages.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceOffering {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub price: &'static str,
    pub duration: &'static str,
}

pub static SERVICES: [ServiceOffering; 4] = [
    ServiceOffering {
        id: "1",
        name: "Window Repair",
        description: "Professional repair services for damaged windows",
        icon: "wrench",
        price: "From $89",
        duration: "1-2 hours",
    },
    ServiceOffering {
        id: "2",
        name: "Window Replacement",
        description: "Complete window replacement with premium materials",
        icon: "replace",
        price: "From $299",
        duration: "2-4 hours",
    },
    ServiceOffering {
        id: "3",
        name: "Window Repainting",
        description: "Refresh your windows with professional repainting",
        icon: "paintbrush",
        price: "From $149",
        duration: "2-3 hours",
    },
    ServiceOffering {
        id: "4",
        name: "New Installation",
        description: "Expert installation of new windows",
        icon: "hammer",
        price: "From $399",
        duration: "3-6 hours",
    },
];

pub fn find(id: &str) -> Option<&'static ServiceOffering> {
    SERVICES.iter().find(|service| service.id == id)
}

#[cfg(test)]
mod tests {
    use super::{find, SERVICES};

    #[test]
    fn catalog_ids_are_unique_and_resolvable() {
        for service in &SERVICES {
            assert_eq!(find(service.id), Some(service));
        }
        assert_eq!(find("5"), None);
    }

    #[test]
    fn repair_is_the_cheapest_entry() {
        assert_eq!(SERVICES[0].name, "Window Repair");
        assert_eq!(SERVICES[0].price, "From $89");
    }
}
