//! Static seed datasets the chart starts from before any edits or imports.

use super::record::{Effort, Lifecycle, Record, Risk, ValueDriver};

/// Thirteen initiatives sized by benefits, matching the grouped catalog.
#[must_use]
pub fn benefit_sized_records() -> Vec<Record> {
    vec![
        Record::new(
            "Content Studio",
            "Content Creation",
            ValueDriver::InMarketOptimization,
            950_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        ),
        Record::new(
            "Insight Hub",
            "Data Analysis",
            ValueDriver::InsightGeneration,
            1_500_000.0,
            Lifecycle::Pilot,
            Risk::SomeRisk,
            Effort::Medium,
        ),
        Record::new(
            "Quality Sentinel",
            "Data Flagging",
            ValueDriver::PerformanceIntelligence,
            480_000.0,
            Lifecycle::Build,
            Risk::OnTrack,
            Effort::Medium,
        ),
        Record::new(
            "Offer Presentment Optimizer",
            "Offer Presentment",
            ValueDriver::InMarketOptimization,
            2_100_000.0,
            Lifecycle::Launch,
            Risk::SomeRisk,
            Effort::High,
        ),
        Record::new(
            "Data Cleanse Pro",
            "Data Correction",
            ValueDriver::PlanImplementation,
            520_000.0,
            Lifecycle::Pilot,
            Risk::OnTrack,
            Effort::Low,
        ),
        Record::new(
            "Engage360",
            "Digital Engagement",
            ValueDriver::InMarketOptimization,
            1_750_000.0,
            Lifecycle::Operate,
            Risk::OnTrack,
            Effort::High,
        ),
        Record::new(
            "Prospect Miner",
            "Data Mining",
            ValueDriver::OpportunityMapping,
            1_120_000.0,
            Lifecycle::Build,
            Risk::OnTrack,
            Effort::Medium,
        ),
        Record::new(
            "Lifecycle Coach",
            "Customer Engagement (Lifecycle)",
            ValueDriver::IntegratedPlanning,
            2_300_000.0,
            Lifecycle::Build,
            Risk::SomeRisk,
            Effort::Medium,
        ),
        Record::new(
            "RecoMax",
            "Recommendation Engine",
            ValueDriver::InMarketOptimization,
            2_600_000.0,
            Lifecycle::Operate,
            Risk::OnTrack,
            Effort::High,
        ),
        Record::new(
            "SynthGen",
            "Synthetic Data Creation",
            ValueDriver::PerformanceIntelligence,
            820_000.0,
            Lifecycle::Pilot,
            Risk::SomeRisk,
            Effort::Medium,
        ),
        Record::new(
            "TestLab",
            "Split Testing (A/B/MVT)",
            ValueDriver::InMarketOptimization,
            690_000.0,
            Lifecycle::Discovery,
            Risk::OnTrack,
            Effort::Low,
        ),
        Record::new(
            "Smart Segments",
            "Segmentation",
            ValueDriver::OpportunityMapping,
            980_000.0,
            Lifecycle::Build,
            Risk::OnTrack,
            Effort::Medium,
        ),
        Record::new(
            "Audience Booster",
            "Audience Optimization",
            ValueDriver::BrandAndGrowthStrategy,
            1_950_000.0,
            Lifecycle::Launch,
            Risk::SomeRisk,
            Effort::Medium,
        ),
    ]
}

/// Thirty-six initiatives carrying cost, matching the compact catalog.
#[must_use]
pub fn cost_sized_records() -> Vec<Record> {
    vec![
        Record::new(
            "Content Studio",
            "Content Creation",
            ValueDriver::InMarketOptimization,
            950_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(180_000.0),
        Record::new(
            "AskData - Audience Discovery (P2)",
            "Segmentation",
            ValueDriver::OpportunityMapping,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(220_000.0),
        Record::new(
            "AskAudience - Audience Segmentation GenAI (Prod)",
            "Segmentation",
            ValueDriver::OpportunityMapping,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(200_000.0),
        Record::new(
            "High-Intent False Reds Fix",
            "Data Correction",
            ValueDriver::InsightGeneration,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(120_000.0),
        Record::new(
            "Social Media Feedback Loop",
            "Sentiment Analysis",
            ValueDriver::InsightGeneration,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(90_000.0),
        Record::new(
            "AskRetail - Deep Customer Insights (DCI)",
            "Search & Retrieval (RAG)",
            ValueDriver::InsightGeneration,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(250_000.0),
        Record::new(
            "Insightful Search (Strativio 2025)",
            "Search & Retrieval (RAG)",
            ValueDriver::InsightGeneration,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(190_000.0),
        Record::new(
            "Enable Cludo AI Summary",
            "Search & Retrieval (RAG)",
            ValueDriver::InsightGeneration,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(110_000.0),
        Record::new(
            "Audience StartRight",
            "Segmentation",
            ValueDriver::OpportunityMapping,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(150_000.0),
        Record::new(
            "1876 - Content Generation (Phase 2)",
            "Content Creation",
            ValueDriver::PlanImplementation,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(130_000.0),
        Record::new(
            "1876 - Content Generation (Phase 3)",
            "Content Creation",
            ValueDriver::PlanImplementation,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(160_000.0),
        Record::new(
            "New Content Generation Solution",
            "Content Creation",
            ValueDriver::PlanImplementation,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(140_000.0),
        Record::new(
            "Digital - Spanish Translation",
            "Translation/Transcription",
            ValueDriver::PlanImplementation,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(80_000.0),
        Record::new(
            "Paid Media Optimization via Claritas MMA (+PILOT)",
            "Audience Optimization",
            ValueDriver::InMarketOptimization,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(210_000.0),
        Record::new(
            "Customized Product Offerings (Designed by Dad)",
            "Offer Presentment",
            ValueDriver::InMarketOptimization,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(175_000.0),
        Record::new(
            "Accessory Promotion Recommender",
            "Recommendation Engine",
            ValueDriver::InMarketOptimization,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(155_000.0),
        Record::new(
            "Accessory Recommender",
            "Recommendation Engine",
            ValueDriver::InMarketOptimization,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(145_000.0),
        Record::new(
            "AI Decisioning Tool",
            "Workflow Automation",
            ValueDriver::PlanImplementation,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(240_000.0),
        Record::new(
            "Moving/Switcher Wizard (Bill Screenshot)",
            "Image/Video Analysis",
            ValueDriver::PlanImplementation,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(260_000.0),
        Record::new(
            "Personalization Agentic AI",
            "Personalization",
            ValueDriver::InMarketOptimization,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(230_000.0),
        Record::new(
            "Wake Up With Craig (AT&T Small Business)",
            "Digital Engagement",
            ValueDriver::PlanImplementation,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(95_000.0),
        Record::new(
            "Idealab AI Agent",
            "Knowledge Base / Q&A",
            ValueDriver::PlanImplementation,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(170_000.0),
        Record::new(
            "Google AI-Max for Paid Search",
            "Audience Optimization",
            ValueDriver::InMarketOptimization,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(200_000.0),
        Record::new(
            "UC 300 - The Nudge: Real-Time Call Offers",
            "Voice/Speech Recognition",
            ValueDriver::InMarketOptimization,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(300_000.0),
        Record::new(
            "Real-Time Call Offers - Mobility",
            "Recommendation Engine",
            ValueDriver::InMarketOptimization,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(270_000.0),
        Record::new(
            "Use Case 89 - AI Brief Builder (Production)",
            "Workflow Automation",
            ValueDriver::PlanImplementation,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(125_000.0),
        Record::new(
            "Video Editing Efficiencies (DaVinci)",
            "Content Creation",
            ValueDriver::PlanImplementation,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(85_000.0),
        Record::new(
            "Generate Metadata (Products/Pages)",
            "Content Creation",
            ValueDriver::PlanImplementation,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(92_000.0),
        Record::new(
            "AI-Prompted Exclusive Offers",
            "Offer Presentment",
            ValueDriver::InMarketOptimization,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(160_000.0),
        Record::new(
            "AskData / Ask Databases - Campaign Evaluation (P2)",
            "Data Analysis",
            ValueDriver::PerformanceIntelligence,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(210_000.0),
        Record::new(
            "Abandonment & Progression Analysis (High-Intent)",
            "Prediction / Forecasting",
            ValueDriver::PerformanceIntelligence,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(185_000.0),
        Record::new(
            "Neurons - Creative Evaluation Tool",
            "Image/Video Analysis",
            ValueDriver::PerformanceIntelligence,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(275_000.0),
        Record::new(
            "Digital Experimentation Archive & Decisioning",
            "Knowledge Base / Q&A",
            ValueDriver::PerformanceIntelligence,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(120_000.0),
        Record::new(
            "Use-Case Deduplication & Similarity Detection",
            "Data Flagging",
            ValueDriver::PerformanceIntelligence,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(90_000.0),
        Record::new(
            "Use Case 89 - AI Brief Builder (Design)",
            "Document Generation",
            ValueDriver::IntegratedPlanning,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(115_000.0),
        Record::new(
            "Blueprint Booster",
            "Knowledge Base / Q&A",
            ValueDriver::BrandAndGrowthStrategy,
            1_000_000.0,
            Lifecycle::Discovery,
            Risk::RiskUnknown,
            Effort::Low,
        )
        .with_cost(135_000.0),
    ]
}
