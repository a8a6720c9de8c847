//! Copy for the marketing pages. Pages render from these tables, so wording
//! changes never touch component code.

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct CaseStudy {
    pub anchor: &'static str,
    pub headline: &'static str,
    pub client: &'static str,
    pub summary: &'static str,
    pub problem: &'static str,
    pub solution: &'static str,
    pub metrics: &'static [Metric],
}

pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub featured: bool,
}

pub struct ProcessStep {
    pub title: &'static str,
    pub timeline: &'static str,
    pub summary: &'static str,
    pub details: &'static [&'static str],
}

pub struct Testimonial {
    pub text: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub struct CompanyValue {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "🤝",
        title: "AI-Enabled CRM Automation",
        summary: "Automatically capture leads, follow up with prospects, and manage your sales pipeline without lifting a finger. Increase follow-up rates by 85%.",
        description: "Stop losing leads in spreadsheets and email chains. Our AI-enabled CRM systems automatically capture every lead, follow up at the perfect time, and keep your pipeline organized so you never miss an opportunity.",
        features: &[
            "Automatic lead capture from all sources",
            "Smart follow-up sequences based on behavior",
            "Pipeline management with zero manual data entry",
            "85% average increase in follow-up rates",
        ],
    },
    Service {
        icon: "⚙️",
        title: "Workflow Automation",
        summary: "Eliminate repetitive tasks like data entry, scheduling, and reporting. Save 20+ hours per week for your team to focus on high-value work.",
        description: "Your team shouldn't be spending hours on data entry, scheduling, and administrative tasks. We build custom workflow automation that handles the repetitive work, so your people can focus on growing your business.",
        features: &[
            "Eliminate manual data entry across systems",
            "Automated scheduling and appointment management",
            "Smart document generation and processing",
            "Save 20+ hours per week per employee",
        ],
    },
    Service {
        icon: "💬",
        title: "Customer Communication Systems",
        summary: "Intelligent chatbots and automated follow-up systems that keep customers engaged while reducing response time by 70%.",
        description: "Never let a customer inquiry go unanswered. Our AI-powered communication systems handle customer questions 24/7, send timely follow-ups, and keep your customers engaged without requiring your team to work around the clock.",
        features: &[
            "24/7 intelligent chatbot support",
            "Automated email and SMS follow-ups",
            "Customer engagement tracking and insights",
            "70% reduction in response time",
        ],
    },
    Service {
        icon: "📊",
        title: "AI-Powered Analytics",
        summary: "Transform raw data into actionable insights. Get real-time dashboards and predictive analytics to make smarter business decisions.",
        description: "Stop guessing and start knowing. Our AI-powered analytics transform your raw business data into clear, actionable insights with real-time dashboards, predictive analytics, and automated reports.",
        features: &[
            "Real-time business performance dashboards",
            "Predictive analytics for sales and operations",
            "Automated report generation and distribution",
            "Data-driven insights for strategic decisions",
        ],
    },
    Service {
        icon: "🛠️",
        title: "Operations Optimization",
        summary: "Streamline your entire operation from scheduling to invoicing. Perfect for service companies like plumbing, landscaping, and roofing.",
        description: "Built specifically for service companies like plumbing, landscaping, and roofing, our operations optimization systems streamline everything from job scheduling to invoicing. Spend less time on paperwork and more time serving customers.",
        features: &[
            "Smart job scheduling and dispatch",
            "Automated invoicing and payment tracking",
            "Inventory and equipment management",
            "Customer portal for easy communication",
        ],
    },
    Service {
        icon: "🧩",
        title: "Custom AI Solutions",
        summary: "Every business is unique. We design and build custom automation systems tailored specifically to your industry and workflow.",
        description: "No two businesses are exactly alike. If you have a unique workflow or industry-specific challenge, we'll design and build a custom AI solution tailored specifically to your needs.",
        features: &[
            "Fully customized to your workflow",
            "Industry-specific features and integrations",
            "Scalable architecture that grows with you",
            "Dedicated support and ongoing optimization",
        ],
    },
];

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        anchor: "case-study-1",
        headline: "85% Increase in Follow-Up Rate",
        client: "Regional Home Improvement Company",
        summary: "A regional home improvement company automated their lead follow-up process, converting 3X more prospects into customers.",
        problem: "A regional home improvement company was losing leads due to slow follow-up times. Their sales team was overwhelmed with manual data entry and couldn't keep up with incoming inquiries.",
        solution: "We implemented an AI-enabled CRM automation system that automatically captured leads from all sources, scored them based on likelihood to convert, and sent personalized follow-up sequences at optimal times.",
        metrics: &[
            Metric { value: "85%", label: "Increase in follow-up rate" },
            Metric { value: "3X", label: "More prospects converted" },
            Metric { value: "$200K+", label: "Additional annual revenue" },
        ],
    },
    CaseStudy {
        anchor: "case-study-2",
        headline: "20+ Hours Saved Per Week",
        client: "Johnson's Plumbing Services",
        summary: "A plumbing service eliminated manual scheduling and invoicing, freeing up time for growth and customer service.",
        problem: "The owner spent countless hours on scheduling, invoicing, and follow-up calls. His team was bogged down with paperwork instead of serving customers.",
        solution: "Our operations optimization system automated scheduling, invoicing, payment reminders, and customer communication, leaving more time for growth and better customer service.",
        metrics: &[
            Metric { value: "20+", label: "Hours saved weekly" },
            Metric { value: "40%", label: "Faster invoicing" },
            Metric { value: "95%", label: "Customer satisfaction" },
        ],
    },
    CaseStudy {
        anchor: "case-study-3",
        headline: "$50K+ Annual Savings",
        client: "Corporate Client - Multi-Department Automation",
        summary: "A corporate client reduced operational costs by automating data entry and report generation across departments.",
        problem: "A mid-sized corporation was spending thousands on manual data entry, report generation, and administrative overhead across multiple departments.",
        solution: "We built custom workflow automation that eliminated repetitive tasks, automated reporting, and integrated their systems. The efficiency gains translated directly to cost savings.",
        metrics: &[
            Metric { value: "$50K+", label: "Annual cost savings" },
            Metric { value: "75%", label: "Reduction in manual entry" },
            Metric { value: "100%", label: "ROI in first year" },
        ],
    },
];

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Starter",
        price: "$5K-$15K",
        description: "Perfect for small businesses ready to automate one key workflow.",
        features: &["Single automation workflow", "CRM setup or basic workflow", "Team training", "30 days support"],
        featured: false,
    },
    PricingTier {
        name: "Professional",
        price: "$15K-$40K",
        description: "Ideal for growing companies ready to scale with integrated systems.",
        features: &["Multiple integrated automations", "Full CRM + workflow systems", "Custom integrations", "60 days optimization"],
        featured: true,
    },
    PricingTier {
        name: "Enterprise",
        price: "$40K+",
        description: "For established companies needing comprehensive AI transformation.",
        features: &["Fully custom AI solutions", "Enterprise integrations", "Advanced analytics", "Ongoing partnership"],
        featured: false,
    },
];

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        title: "Discovery Meeting",
        timeline: "Week 1",
        summary: "We start with a comprehensive Free AI Audit call to understand your business, identify bottlenecks, and explore automation opportunities.",
        details: &[
            "Deep-dive into your current workflows",
            "Identify repetitive tasks and pain points",
            "Discuss your goals and growth challenges",
            "Explore potential automation opportunities",
            "No obligation, just valuable insights",
        ],
    },
    ProcessStep {
        title: "Strategy & Planning",
        timeline: "Week 2-3",
        summary: "Our team designs a custom automation roadmap tailored to your workflow, with clear ROI projections and implementation timelines.",
        details: &[
            "Custom automation strategy document",
            "ROI projections and cost-benefit analysis",
            "Detailed implementation timeline",
            "Technology recommendations",
            "Transparent pricing and project scope",
        ],
    },
    ProcessStep {
        title: "Implementation",
        timeline: "Week 4-12",
        summary: "We build, test, and deploy your AI systems with minimal disruption to your operations. Your team gets full training and support throughout.",
        details: &[
            "Agile development with weekly check-ins",
            "Thorough testing before deployment",
            "Minimal disruption to daily operations",
            "Comprehensive team training",
            "Documentation and knowledge transfer",
            "Timeline varies based on project complexity",
        ],
    },
    ProcessStep {
        title: "Optimization & Support",
        timeline: "Ongoing",
        summary: "We continuously monitor performance, gather feedback, and refine your systems to ensure maximum value and efficiency over time.",
        details: &[
            "Performance monitoring and analytics",
            "Regular optimization and improvements",
            "Priority technical support",
            "Quarterly strategy consultations",
            "System updates and new feature rollout",
        ],
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        text: "Full Stack AI Automation transformed how we operate. We went from drowning in paperwork to having a streamlined system that runs itself. Our follow-up rate has never been higher.",
        author: "Mike Johnson",
        role: "Owner, Johnson's Plumbing Services",
    },
    Testimonial {
        text: "I was skeptical about AI until I met this team. They took the time to understand our business and created a solution that actually works. We're saving 20 hours a week on admin tasks alone.",
        author: "Sarah Chen",
        role: "Operations Manager, GreenScape Landscaping",
    },
    Testimonial {
        text: "Finally, an AI solution that delivers real ROI. The team at Full Stack AI didn't just sell us software, they became our partners in growth. Our efficiency has tripled.",
        author: "David Martinez",
        role: "CEO, Martinez Roofing & Construction",
    },
];

pub const VALUES: &[CompanyValue] = &[
    CompanyValue {
        title: "Human-Centered",
        description: "We build AI that enhances human capabilities, not replaces them.",
    },
    CompanyValue {
        title: "Results-Driven",
        description: "Every solution we create must deliver measurable ROI and value.",
    },
    CompanyValue {
        title: "Partnership",
        description: "We become an extension of your team, committed to your long-term success.",
    },
];

pub const AUDIT_BENEFITS: &[&str] = &[
    "Comprehensive workflow analysis",
    "Custom automation recommendations",
    "ROI projections and time savings estimates",
    "Technology recommendations specific to your needs",
    "No-obligation consultation with our team",
];

pub const AUDIT_TESTIMONIAL: Testimonial = Testimonial {
    text: "The free audit alone saved us hours of research. We learned exactly what we needed and what it would cost before committing to anything.",
    author: "Sarah Chen",
    role: "GreenScape Landscaping",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_featured_tier() {
        assert_eq!(PRICING_TIERS.iter().filter(|t| t.featured).count(), 1);
    }

    #[test]
    fn case_study_anchors_are_unique() {
        let mut anchors: Vec<_> = CASE_STUDIES.iter().map(|c| c.anchor).collect();
        anchors.sort_unstable();
        anchors.dedup();
        assert_eq!(anchors.len(), CASE_STUDIES.len());
    }
}
