use super::types::Category;

/// The eight categories shown on the home screen carousel
pub static CATEGORIES: [Category; 8] = [
    Category {
        id: 1,
        slug: "cleaning",
        name: "Cleaning",
        icon: "broom",
        color: "#3498DB",
        gradient: ["#3498DB", "#5DADE2"],
        count: 124,
    },
    Category {
        id: 2,
        slug: "plumbing",
        name: "Plumbing",
        icon: "water",
        color: "#1ABC9C",
        gradient: ["#1ABC9C", "#48C9B0"],
        count: 89,
    },
    Category {
        id: 3,
        slug: "electrical",
        name: "Electrical",
        icon: "flash",
        color: "#F39C12",
        gradient: ["#F39C12", "#F8C471"],
        count: 156,
    },
    Category {
        id: 4,
        slug: "carpentry",
        name: "Carpentry",
        icon: "hammer",
        color: "#9B59B6",
        gradient: ["#9B59B6", "#BB8FCE"],
        count: 72,
    },
    Category {
        id: 5,
        slug: "painting",
        name: "Painting",
        icon: "color-palette",
        color: "#E74C3C",
        gradient: ["#E74C3C", "#EC7063"],
        count: 98,
    },
    Category {
        id: 6,
        slug: "gardening",
        name: "Gardening",
        icon: "leaf",
        color: "#27AE60",
        gradient: ["#27AE60", "#52BE80"],
        count: 65,
    },
    Category {
        id: 7,
        slug: "moving",
        name: "Moving",
        icon: "car",
        color: "#E67E22",
        gradient: ["#E67E22", "#EB984E"],
        count: 43,
    },
    Category {
        id: 8,
        slug: "pet-care",
        name: "Pet Care",
        icon: "paw",
        color: "#16A085",
        gradient: ["#16A085", "#45B39D"],
        count: 56,
    },
];

pub fn category_by_id(id: u32) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.id == id)
}

/// Case-insensitive; also accepts the display name ("Pet Care")
pub fn category_by_slug(slug: &str) -> Option<&'static Category> {
    let wanted = slug.trim();
    CATEGORIES.iter().find(|category| {
        category.slug.eq_ignore_ascii_case(wanted) || category.name.eq_ignore_ascii_case(wanted)
    })
}
