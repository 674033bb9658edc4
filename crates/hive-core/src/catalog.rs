//! Static service catalog shown on the services page.

use serde::Serialize;

/// One service offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

/// Every service the studio offers, in display order.
pub const SERVICES: &[Service] = &[
    Service {
        title: "UI/UX Design for Web & Mobile",
        description: "Create stunning, user-centric interfaces that drive engagement and conversions.",
        features: &[
            "User research and persona development",
            "Wireframing and prototyping",
            "Complete design systems",
            "Mobile-first responsive design",
            "Accessibility compliance",
            "Usability testing and iteration",
        ],
        technologies: &["Figma", "Adobe XD", "Sketch", "InVision", "Principle"],
    },
    Service {
        title: "Full-Stack Development",
        description: "Build robust, scalable applications using cutting-edge technologies and best practices.",
        features: &[
            "Custom web application development",
            "RESTful & GraphQL API design",
            "Real-time features with WebSockets",
            "Progressive Web Apps (PWA)",
            "Microservices architecture",
            "CI/CD pipeline setup",
        ],
        technologies: &["React", "Node.js", "Python", "Java", "PostgreSQL", "MongoDB"],
    },
    Service {
        title: "Database Setup & Management",
        description: "Design and optimize database architecture for performance, scalability, and reliability.",
        features: &[
            "Database schema design",
            "Query optimization",
            "Data migration services",
            "Backup and recovery solutions",
            "Performance monitoring",
            "Security hardening",
        ],
        technologies: &["PostgreSQL", "MongoDB", "Redis", "MySQL", "Elasticsearch"],
    },
    Service {
        title: "Debugging & Performance Optimization",
        description: "Identify and resolve complex issues, optimize performance, and improve code quality.",
        features: &[
            "Code review and analysis",
            "Performance profiling",
            "Memory leak detection",
            "Load testing and optimization",
            "Security vulnerability assessment",
            "Technical debt reduction",
        ],
        technologies: &["Chrome DevTools", "Lighthouse", "New Relic", "Sentry", "DataDog"],
    },
    Service {
        title: "Maintenance & Scaling",
        description: "Ensure your application grows smoothly with your business needs.",
        features: &[
            "Application monitoring",
            "Infrastructure scaling",
            "Load balancing setup",
            "CDN integration",
            "Caching strategies",
            "Auto-scaling configuration",
        ],
        technologies: &["AWS", "Docker", "Kubernetes", "Nginx", "CloudFlare"],
    },
    Service {
        title: "Technical Consulting & Support",
        description: "Expert guidance and round-the-clock support to keep your project on track.",
        features: &[
            "Architecture consultation",
            "Technology stack selection",
            "Code audits and reviews",
            "24/7 emergency support",
            "Team training and mentoring",
            "Documentation and knowledge transfer",
        ],
        technologies: &["Custom Solutions", "Best Practices", "Industry Standards"],
    },
];

/// Look up a service by case-insensitive title prefix.
#[must_use]
pub fn find_service(prefix: &str) -> Option<&'static Service> {
    let needle = prefix.to_lowercase();
    SERVICES
        .iter()
        .find(|s| s.title.to_lowercase().starts_with(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_services_each_with_six_features() {
        assert_eq!(SERVICES.len(), 6);
        assert!(SERVICES.iter().all(|s| s.features.len() == 6));
        assert!(SERVICES.iter().all(|s| !s.technologies.is_empty()));
    }

    #[test]
    fn find_by_prefix() {
        let found = find_service("database").unwrap();
        assert_eq!(found.title, "Database Setup & Management");
        assert!(find_service("quantum").is_none());
    }
}
