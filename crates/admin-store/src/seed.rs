//! Fixed first-run seed for the users collection.

use admin_types::{CredentialDoc, Credentials, UserRecord, UserRole, UserStatus};

/// Demo users installed on first read of an absent collection. Ids and
/// timestamps are fixed so repeated bootstraps are deterministic.
pub fn seed_users() -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: "u-1001".to_string(),
            name: "Elena Vasquez".to_string(),
            email: "elena@harborpointdev.com".to_string(),
            role: UserRole::Developer,
            status: UserStatus::Pending,
            created_at: "2024-11-04T09:15:00Z".to_string(),
            credentials: Credentials {
                id_verified: false,
                docs: vec![
                    CredentialDoc {
                        name: "Broker license".to_string(),
                        url: "https://docs.example.com/u-1001/license.pdf".to_string(),
                    },
                    CredentialDoc {
                        name: "Entity registration".to_string(),
                        url: "https://docs.example.com/u-1001/registration.pdf".to_string(),
                    },
                ],
            },
        },
        UserRecord {
            id: "u-1002".to_string(),
            name: "Marcus Chen".to_string(),
            email: "marcus.chen@oakfieldcapital.io".to_string(),
            role: UserRole::Investor,
            status: UserStatus::Approved,
            created_at: "2024-09-21T14:02:00Z".to_string(),
            credentials: Credentials {
                id_verified: true,
                docs: vec![CredentialDoc {
                    name: "Accreditation letter".to_string(),
                    url: "https://docs.example.com/u-1002/accreditation.pdf".to_string(),
                }],
            },
        },
        UserRecord {
            id: "u-1003".to_string(),
            name: "Priya Raman".to_string(),
            email: "priya@summitridgebuilders.com".to_string(),
            role: UserRole::Developer,
            status: UserStatus::Suspended,
            created_at: "2024-07-12T11:40:00Z".to_string(),
            credentials: Credentials {
                id_verified: true,
                docs: vec![CredentialDoc {
                    name: "Contractor license".to_string(),
                    url: "https://docs.example.com/u-1003/license.pdf".to_string(),
                }],
            },
        },
        UserRecord {
            id: "u-1004".to_string(),
            name: "Tomás Oliveira".to_string(),
            email: "tomas.oliveira@gmail.com".to_string(),
            role: UserRole::Investor,
            status: UserStatus::Pending,
            created_at: "2025-01-08T16:27:00Z".to_string(),
            credentials: Credentials {
                id_verified: false,
                docs: vec![CredentialDoc {
                    name: "Government ID".to_string(),
                    url: "https://docs.example.com/u-1004/id.pdf".to_string(),
                }],
            },
        },
    ]
}
