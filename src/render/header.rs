/// Field mapping for the search index, followed by the opening of the
/// `updates` array. Emitted verbatim at the top of every index document.
pub const INDEX_HEADER: &str = r#"{
  "metadata" : {
    "mapping" : {
      "_all" : {
        "enabled" : false
      },
      "properties" : {
        "name" : {
          "type" : "string",
          "index" : "analyzed"
        },
        "title" : {
          "type" : "string",
          "index" : "analyzed"
        },
        "kind" : {
          "type" : "string",
          "index" : "no"
        },
        "url" : {
          "type" : "string",
          "index" : "no"
        },
        "summaryHtml" : {
          "type" : "string",
          "index" : "no"
        },
        "descriptionHtml" : {
          "type" : "string",
          "index" : "no"
        },
        "sampleHtml" : {
          "type" : "string",
          "index" : "no"
        },
        "returnType" : {
          "type" : "string",
          "index" : "no"
        },
        "deprecated" : {
          "type" : "string",
          "index" : "no"
        },
        "removed" : {
          "type" : "string",
          "index" : "no"
        },
        "categories" : {
          "type" : "string",
          "index" : "not_analyzed"
        },
        "recognitionKeys" : {
          "type" : "string",
          "index" : "not_analyzed"
        },
        "signatures" : {
          "type" : "object",
          "enabled" : false
        },
        "examples" : {
          "type" : "object",
          "enabled" : false
        }
      }
    }
  },
  "updates" : [
"#;
