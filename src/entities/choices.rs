//! Fixed-choice fields of a submission

use crate::impl_choice;

impl_choice!(
    /// Bank the applicant currently pays EMIs to
    Bank {
        Sbi => "SBI",
        Hdfc => "HDFC",
        Icici => "ICICI",
        Axis => "Axis",
        Pnb => "PNB",
        Slice => "Slice",
        MPokket => "mPokket",
        KreditBee => "KreditBee",
        Other => "Other",
    }
);

impl_choice!(
    /// Answer to "have you used a student loan before?"
    YesNo {
        Yes => "yes",
        No => "no",
    }
);

impl_choice!(
    LoanType {
        Home => "home",
        Personal => "personal",
        Education => "education",
    }
);

impl_choice!(
    /// How EMIs are paid
    PaymentMode {
        Cash => "cash",
        Upi => "upi",
        Card => "card",
        NetBanking => "netbanking",
        AutoDebit => "auto_debit",
        Ecs => "ecs",
        Cheque => "cheque",
    }
);
