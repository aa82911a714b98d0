use super::DisclaimerMarkers;

pub(super) static DISCLAIMERS: &[DisclaimerMarkers] = &[
    DisclaimerMarkers {
        start: "NOTICE: The expiration date displayed in this record",
        end: "reserves the right to modify these terms at any time.",
    },
    DisclaimerMarkers {
        start: "NOTICE AND TERMS OF USE: You are not authorized",
        end: "right to modify these terms at any time.",
    },
    DisclaimerMarkers {
        start: "The data in Register.com's WHOIS database",
        end: "By submitting this query, you agree to abide by these terms.",
    },
    DisclaimerMarkers {
        start: "Access to .ORG WHOIS information is provided",
        end: "time. By submitting this query, you agree to abide by this policy.",
    },
    DisclaimerMarkers {
        start: "The Data in the Tucows Registrar WHOIS database",
        end: "without the prior written consent of Tucows.",
    },
    DisclaimerMarkers {
        start: "% This is the RIPE Whois query server",
        end: "% See http://www.ripe.net/db/support/db-terms-conditions.pdf",
    },
];
