//! Client and supplier descriptors
//!
//! Both resources share the same shape; clients additionally carry the
//! e-invoice settings and a `getInfo` operation.

use ficbridge_domain::constants::DEFAULT_COUNTRY;
use ficbridge_domain::{FieldSpec, OperationDescriptor, OptionValue, PartyType, ResourceDescriptor};

use super::fields::{company_id, crud_operations, limit, record_id, return_all, text};

#[derive(Clone, Copy)]
struct Party {
    name: &'static str,
    display_name: &'static str,
    noun: &'static str,
    plural: &'static str,
    id_key: &'static str,
    name_key: &'static str,
    e_invoice: bool,
}

pub(super) fn client() -> ResourceDescriptor {
    let party = Party {
        name: "client",
        display_name: "Client",
        noun: "client",
        plural: "clients",
        id_key: "clientId",
        name_key: "clientName",
        e_invoice: true,
    };

    let mut descriptor = descriptor(party);
    let get_info = OperationDescriptor::new(
        "Get Info",
        "getInfo",
        "Get client info for creating new clients",
        "Get client info",
    );
    // Listed between get and getAll.
    descriptor.operations.insert(3, get_info);
    descriptor
}

pub(super) fn supplier() -> ResourceDescriptor {
    descriptor(Party {
        name: "supplier",
        display_name: "Supplier",
        noun: "supplier",
        plural: "suppliers",
        id_key: "supplierId",
        name_key: "supplierName",
        e_invoice: false,
    })
}

fn descriptor(party: Party) -> ResourceDescriptor {
    let Party { noun, display_name, .. } = party;

    ResourceDescriptor {
        name: party.name.to_string(),
        display_name: display_name.to_string(),
        fields: vec![
            company_id(),
            record_id(party.id_key, &format!("{display_name} ID"), noun),
            FieldSpec::string(party.name_key, format!("{display_name} Name"))
                .required()
                .with_description(format!("The name of the {noun}"))
                .for_operations(&["create", "update"]),
            FieldSpec::collection("additionalFields", "Additional Fields", additional_fields(party))
                .with_placeholder("Add Field")
                .for_operations(&["create", "update"]),
            return_all(),
            limit(),
        ],
        operations: crud_operations(noun, party.plural),
    }
}

fn additional_fields(party: Party) -> Vec<FieldSpec> {
    let label = party.display_name;
    let mut fields = vec![
        text("address_city", "Address City", &format!("{label} city")),
        text("address_extra", "Address Extra", "Additional address information"),
        text("address_postal_code", "Address Postal Code", &format!("{label} postal code")),
        text("address_province", "Address Province", &format!("{label} province")),
        text("address_street", "Address Street", &format!("{label} street address")),
        text("certified_email", "Certified Email", &format!("{label} certified email (PEC)"))
            .with_placeholder("name@pec.email.com"),
        text("code", "Code", &format!("{label} code")),
        text("contact_person", "Contact Person", "Contact person name"),
        text("country", "Country", &format!("{label} country")).with_default(DEFAULT_COUNTRY),
    ];

    if party.e_invoice {
        fields.push(
            FieldSpec::boolean("e_invoice", "E-Invoice")
                .with_default(false)
                .with_description(format!("Whether the {} uses e-invoice", party.noun)),
        );
        fields.push(text("ei_code", "EI Code", "Electronic invoice code"));
    }

    fields.extend([
        text("email", "Email", &format!("{label} email")).with_placeholder("name@email.com"),
        text("fax", "Fax", &format!("{label} fax number")),
        text("first_name", "First Name", &format!("{label} first name (for person type)")),
        text("last_name", "Last Name", &format!("{label} last name (for person type)")),
        text("notes", "Notes", &format!("{label} notes")),
        text("phone", "Phone", &format!("{label} phone number")),
        text("tax_code", "Tax Code", &format!("{label} tax code")),
        FieldSpec::options(
            "type",
            "Type",
            PartyType::ALL
                .iter()
                .map(|kind| OptionValue::new(kind.display_name(), kind.as_str()))
                .collect(),
        )
        .with_default(PartyType::default().as_str())
        .with_description(format!("{label} type")),
        text("vat_number", "VAT Number", &format!("{label} VAT number")),
    ]);

    fields
}
