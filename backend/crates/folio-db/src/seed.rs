//! Fixed sample rows for a fresh portfolio.

use crate::{ProjectStore, Result as DbErrorResult};

use folio_core::{NewProject, timestamp};

use log::info;

struct Sample {
    title: &'static str,
    description: &'static str,
    url: &'static str,
    image_url: &'static str,
    category: &'static str,
}

const SAMPLES: [Sample; 3] = [
    Sample {
        title: "Algorithmic Trading Bot",
        description: "Developed a Python-based algorithmic trading system using machine learning to predict market trends. Implemented risk management protocols and achieved 15% average monthly returns in backtesting.",
        url: "https://github.com/username/trading-bot",
        image_url: "https://images.unsplash.com/photo-1611974789855-9c2a0a7236a3?w=800",
        category: "Trading",
    },
    Sample {
        title: "E-Commerce Platform",
        description: "Full-stack e-commerce web application built with Next.js, TypeScript, and Stripe integration. Features include real-time inventory management, secure payment processing, and responsive design.",
        url: "https://github.com/username/ecommerce-platform",
        image_url: "https://images.unsplash.com/photo-1557821552-17105176677c?w=800",
        category: "Web Development",
    },
    Sample {
        title: "Workflow Automation Suite",
        description: "Created a comprehensive automation toolkit using Python and Node.js that streamlines data processing, report generation, and email notifications. Reduced manual work by 80% for repetitive tasks.",
        url: "https://github.com/username/automation-suite",
        image_url: "https://images.unsplash.com/photo-1518432031352-d6fc5c10da5a?w=800",
        category: "Automation",
    },
];

/// The three sample projects, ordered 0, 1, 2.
pub fn sample_projects() -> Vec<NewProject> {
    SAMPLES
        .iter()
        .zip(0_i64..)
        .map(|(s, order_index)| NewProject {
            title: s.title.to_string(),
            description: s.description.to_string(),
            url: s.url.to_string(),
            image_url: Some(s.image_url.to_string()),
            category: Some(s.category.to_string()),
            order_index,
        })
        .collect()
}

/// Insert the sample projects unless the table already has rows.
///
/// Returns the number of rows inserted.
pub async fn seed_if_empty(store: &dyn ProjectStore) -> DbErrorResult<usize> {
    let existing = store.count().await?;
    if existing > 0 {
        info!("Skipping sample data: {} project(s) already present", existing);
        return Ok(0);
    }

    let samples = sample_projects();
    for sample in &samples {
        store.create(sample, timestamp::now()).await?;
    }

    info!("Seeded {} sample projects", samples.len());
    Ok(samples.len())
}
