use chrono::NaiveDate;
use sie_rs::models::SieResponse;

#[test]
fn parse_sample_data_json() {
    let sample = r#"
    {
      "bmx": {
        "series": [
          {
            "idSerie": "SF43718",
            "titulo": "Tipo de cambio pesos por dólar E.U.A., fecha de determinación (FIX)",
            "datos": [
              {"fecha": "02/01/2020", "dato": "18.8935"},
              {"fecha": "03/01/2020", "dato": "18.8643"},
              {"fecha": "06/01/2020", "dato": "N/E"}
            ]
          }
        ]
      }
    }
    "#;

    let resp: SieResponse = serde_json::from_str(sample).unwrap();
    assert_eq!(resp.bmx.series.len(), 1);
    let serie = &resp.bmx.series[0];
    assert_eq!(serie.id_serie, "SF43718");
    assert_eq!(serie.datos.as_ref().unwrap().len(), 3);

    let rows = resp.data_points();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].series_id, "SF43718");
    assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2020, 1, 2));
    assert_eq!(rows[0].value, Some(18.8935));
    assert_eq!(rows[2].value, None);
}

#[test]
fn parse_sample_metadata_json() {
    let sample = r#"
    {
      "bmx": {
        "series": [
          {
            "idSerie": "SF43718",
            "titulo": "Tipo de cambio pesos por dólar E.U.A., fecha de determinación (FIX)",
            "fechaInicio": "12/11/1991",
            "fechaFin": "03/01/2020",
            "periodicidad": "Diaria",
            "cifra": "Tipo de Cambio",
            "unidad": "Pesos por Dólar",
            "versionada": false
          }
        ]
      }
    }
    "#;

    let resp: SieResponse = serde_json::from_str(sample).unwrap();
    let serie = &resp.bmx.series[0];
    assert_eq!(serie.fecha_inicio.as_deref(), Some("12/11/1991"));
    assert_eq!(serie.periodicidad.as_deref(), Some("Diaria"));
    assert_eq!(serie.unidad.as_deref(), Some("Pesos por Dólar"));
    assert_eq!(serie.versionada, Some(false));
    assert!(serie.datos.is_none());
    assert!(resp.data_points().is_empty());
}

#[test]
fn flatten_preserves_series_and_response_order() {
    let sample = r#"
    {
      "bmx": {
        "series": [
          {
            "idSerie": "SP74625",
            "titulo": "Índice nacional de precios al consumidor",
            "datos": [{"fecha": "01/01/2021", "dato": "110.210"}]
          },
          {
            "idSerie": "SF61745",
            "titulo": "Agregados monetarios M1",
            "datos": [
              {"fecha": "01/01/2021", "dato": "5,994,084.5"},
              {"fecha": "01/02/2021", "dato": "6,012,911.0"}
            ]
          }
        ]
      }
    }
    "#;

    let resp: SieResponse = serde_json::from_str(sample).unwrap();
    let rows = resp.data_points();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].series_id, "SP74625");
    assert_eq!(rows[1].series_id, "SF61745");
    // thousands separators are stripped
    assert_eq!(rows[1].value, Some(5_994_084.5));
    assert_eq!(rows[2].value, Some(6_012_911.0));
}

#[test]
fn empty_series_array_yields_no_rows() {
    let resp: SieResponse = serde_json::from_str(r#"{"bmx": {"series": []}}"#).unwrap();
    assert!(resp.data_points().is_empty());
}
