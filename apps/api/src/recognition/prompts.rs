pub const ENTITY_SYSTEM: &str = "You are a named-entity recognizer for job descriptions. \
    Label spans with OntoNotes categories: PERSON, NORP, FAC, ORG, GPE, LOC, PRODUCT, EVENT, \
    WORK_OF_ART, LAW, LANGUAGE, DATE, TIME, PERCENT, MONEY, QUANTITY, ORDINAL, CARDINAL. \
    Software products, frameworks, libraries, cloud platforms and databases are PRODUCT. \
    Companies and vendors are ORG.";

pub const ENTITY_PROMPT_TEMPLATE: &str = r#"Extract every named entity from the job description below.

Return a JSON array of objects, one per distinct entity (list each entity once, however often it appears):
[{"text": "<exact span from the input>", "label": "<CATEGORY>"}]

Return [] when there are no entities.

Job description:
---
{text}
---"#;
