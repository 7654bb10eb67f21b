//! Featured employer directory. Descriptions feed the job-listings flow.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Employer {
    pub name: &'static str,
    pub description: &'static str,
    pub website: &'static str,
    pub linkedin: &'static str,
}

pub const EMPLOYERS: &[Employer] = &[
    Employer {
        name: "Tata Consultancy Services",
        description: "A global leader in IT services, consulting, and business solutions.",
        website: "https://www.tcs.com",
        linkedin: "https://www.linkedin.com/company/tata-consultancy-services/",
    },
    Employer {
        name: "Reliance Industries",
        description: "An Indian multinational conglomerate company, engaged in energy, \
                      petrochemicals, natural gas, retail, telecommunications, mass media, and textiles.",
        website: "https://www.ril.com",
        linkedin: "https://www.linkedin.com/company/reliance-industries-limited/",
    },
    Employer {
        name: "Infosys",
        description: "A global leader in next-generation digital services and consulting.",
        website: "https://www.infosys.com",
        linkedin: "https://www.linkedin.com/company/infosys/",
    },
    Employer {
        name: "HDFC Bank",
        description: "A leading private sector bank in India, providing a wide range of \
                      financial products and services.",
        website: "https://www.hdfcbank.com",
        linkedin: "https://www.linkedin.com/company/hdfc-bank/",
    },
    Employer {
        name: "Wipro",
        description: "A leading global information technology, consulting and business \
                      process services company.",
        website: "https://www.wipro.com",
        linkedin: "https://www.linkedin.com/company/wipro/",
    },
    Employer {
        name: "Flipkart",
        description: "One of India's leading e-commerce marketplaces.",
        website: "https://www.flipkart.com",
        linkedin: "https://www.linkedin.com/company/flipkart/",
    },
];

/// Case-insensitive lookup by company name.
pub fn find_employer(name: &str) -> Option<&'static Employer> {
    let name = name.trim();
    EMPLOYERS.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}
