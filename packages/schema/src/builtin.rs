//! Built-in widget declarations
//!
//! One function per block shipped with the plugin. Field order is the order
//! errors are reported in.

use crate::{FieldSchema, WidgetSchema};

/// Slide set: contact details plus a carousel of text slides
pub fn contacts() -> WidgetSchema {
    WidgetSchema::new("contacts")
        .field(FieldSchema::group(
            "details",
            vec![
                FieldSchema::media("image").required("Image is required"),
                FieldSchema::list(
                    "requisites",
                    "requisite",
                    vec![
                        FieldSchema::text("type").required("Requisite type is required"),
                        FieldSchema::text("link").required("Requisite link is required"),
                    ],
                )
                .required("At least one requisite is required"),
            ],
        ))
        .field(
            FieldSchema::list(
                "slides",
                "slide",
                vec![
                    FieldSchema::text("text").required("Slide text is required"),
                    FieldSchema::flag("highlighted"),
                ],
            )
            .required("At least one slide is required"),
        )
}

pub fn errorpage() -> WidgetSchema {
    WidgetSchema::new("errorpage")
        .field(FieldSchema::text("title").required("Title is required"))
        .field(FieldSchema::text("buttonText").required("Button text is required"))
}

/// Jobs, each with its own gallery of projects
pub fn experience() -> WidgetSchema {
    WidgetSchema::new("experience")
        .field(FieldSchema::text("title").required("Title is required"))
        .field(
            FieldSchema::list(
                "jobs",
                "job",
                vec![
                    FieldSchema::text("title").required("Job title is required"),
                    FieldSchema::text("date").required("Job date is required"),
                    FieldSchema::media("image").required("Job image is required"),
                    FieldSchema::text("text").required("Job text is required"),
                    FieldSchema::list(
                        "projects",
                        "project",
                        vec![
                            FieldSchema::media("image").required("Project image is required"),
                            FieldSchema::text("link").required("Project link is required"),
                        ],
                    )
                    .required("At least one project is required"),
                ],
            )
            .required("At least one item is required"),
        )
}

pub fn intro() -> WidgetSchema {
    WidgetSchema::new("intro")
        .field(FieldSchema::text("title").required("Title is required"))
        .field(FieldSchema::text("text").required("Text is required"))
        .field(FieldSchema::text("buttonText").required("Button text is required"))
}

pub fn projects() -> WidgetSchema {
    WidgetSchema::new("projects")
        .field(FieldSchema::text("title").required("Title is required"))
        .field(
            FieldSchema::list(
                "projects",
                "project",
                vec![
                    FieldSchema::media("image").required("Project image is required"),
                    FieldSchema::media("gif").required("Project GIF is required"),
                    FieldSchema::text("link"),
                    FieldSchema::text("repo"),
                    FieldSchema::flag("isLive"),
                ],
            )
            .required("At least one item is required"),
        )
}

pub fn services() -> WidgetSchema {
    WidgetSchema::new("services")
        .field(FieldSchema::text("title").required("Title is required"))
        .field(
            FieldSchema::list(
                "services",
                "service",
                vec![
                    FieldSchema::text("title").required("Service title is required"),
                    FieldSchema::text("subtitle"),
                    FieldSchema::media("image").required("Service image is required"),
                    FieldSchema::text("text").required("Service text is required"),
                ],
            )
            .required("At least one item is required"),
        )
}

pub fn technologies() -> WidgetSchema {
    WidgetSchema::new("technologies")
        .field(FieldSchema::text("title").required("Title is required"))
        .field(
            FieldSchema::list(
                "technologies",
                "technology",
                vec![FieldSchema::media("image").required("Technology image is required")],
            )
            .required("At least one item is required"),
        )
}

/// Every built-in widget
pub fn all() -> Vec<WidgetSchema> {
    vec![
        contacts(),
        errorpage(),
        experience(),
        intro(),
        projects(),
        services(),
        technologies(),
    ]
}
