//! Cart type conversion functions.
//!
//! Converts a Shopify cart into the engine's cart so it can replace the
//! optimistic snapshot. Server values are taken as-is: totals are not
//! recomputed and lines are not validated.

use pineapple_cart_core::{
    Cart, CartCost, CartItem, CartItemCost, CartMerchandise, CartProduct, Image, Money,
};

use super::types::{
    Cart as ShopifyCart, CartLine, CartMerchandise as ShopifyMerchandise, Image as ShopifyImage,
};

impl From<&ShopifyCart> for Cart {
    fn from(cart: &ShopifyCart) -> Self {
        let total_tax = cart
            .cost
            .total_tax
            .clone()
            .unwrap_or_else(|| Money::zero(cart.cost.total.currency_code.clone()));

        Self {
            id: Some(cart.id.clone()),
            checkout_url: Some(cart.checkout_url.clone()),
            total_quantity: cart.total_quantity,
            cost: CartCost {
                subtotal_amount: cart.cost.subtotal.clone(),
                total_amount: cart.cost.total.clone(),
                total_tax_amount: total_tax,
            },
            lines: cart.lines.iter().map(convert_cart_line).collect(),
        }
    }
}

fn convert_cart_line(line: &CartLine) -> CartItem {
    CartItem {
        id: Some(line.id.clone()),
        quantity: line.quantity,
        cost: CartItemCost {
            total_amount: line.cost.total_amount.clone(),
        },
        merchandise: convert_merchandise(&line.merchandise),
    }
}

fn convert_merchandise(merchandise: &ShopifyMerchandise) -> CartMerchandise {
    // Prefer the variant image; fall back to the product's featured image
    let image = merchandise
        .image
        .as_ref()
        .or(merchandise.product.featured_image.as_ref())
        .map(convert_image);

    CartMerchandise {
        id: merchandise.id.clone(),
        title: merchandise.title.clone(),
        selected_options: merchandise.selected_options.clone(),
        product: CartProduct {
            id: merchandise.product.id.clone(),
            handle: merchandise.product.handle.clone(),
            title: merchandise.product.title.clone(),
            featured_image: image,
        },
    }
}

fn convert_image(image: &ShopifyImage) -> Image {
    Image {
        url: image.url.clone(),
        alt_text: image.alt_text.clone(),
        width: image.width,
        height: image.height,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use serde_json::json;

    fn shopify_cart() -> ShopifyCart {
        serde_json::from_value(json!({
            "id": "gid://shopify/Cart/c1",
            "checkout_url": "https://shop.example.com/cart/c/c1",
            "total_quantity": 3,
            "cost": {
                "subtotal_amount": {"amount": "30.0", "currency_code": "USD"},
                "total_amount": {"amount": "27.0", "currency_code": "USD"}
            },
            "discount_codes": [{"code": "SAVE10", "applicable": true}],
            "lines": [{
                "id": "gid://shopify/CartLine/l1",
                "quantity": 3,
                "cost": {
                    "amount_per_quantity": {"amount": "10.0", "currency_code": "USD"},
                    "subtotal_amount": {"amount": "30.0", "currency_code": "USD"},
                    "total_amount": {"amount": "27.0", "currency_code": "USD"}
                },
                "merchandise": {
                    "id": "gid://shopify/ProductVariant/v1",
                    "title": "Large",
                    "price": {"amount": "10.0", "currency_code": "USD"},
                    "selected_options": [{"name": "Size", "value": "Large"}],
                    "product": {
                        "id": "gid://shopify/Product/p1",
                        "handle": "pineapple-tee",
                        "title": "Pineapple Tee",
                        "vendor": "Naked Pineapple",
                        "featured_image": {"url": "https://cdn.example.com/tee.jpg"}
                    }
                }
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_convert_cart_keeps_server_values() {
        let cart = Cart::from(&shopify_cart());

        assert_eq!(cart.id.as_deref(), Some("gid://shopify/Cart/c1"));
        assert_eq!(
            cart.checkout_url.as_deref(),
            Some("https://shop.example.com/cart/c/c1")
        );
        assert_eq!(cart.total_quantity, 3);
        assert_eq!(cart.cost.subtotal_amount.amount, "30.0");
        assert_eq!(cart.cost.total_amount.amount, "27.0");
        assert_eq!(cart.cost.total_tax_amount, Money::zero("USD"));
    }

    #[test]
    fn test_convert_line() {
        let cart = Cart::from(&shopify_cart());
        let line = &cart.lines[0];

        assert_eq!(line.id.as_deref(), Some("gid://shopify/CartLine/l1"));
        assert_eq!(line.quantity, 3);
        assert_eq!(line.cost.total_amount.amount, "27.0");
        assert_eq!(line.merchandise.id, "gid://shopify/ProductVariant/v1");
        assert_eq!(line.merchandise.selected_options[0].value, "Large");
        assert_eq!(line.merchandise.product.handle, "pineapple-tee");
        assert_eq!(
            line.merchandise.product.featured_image.as_ref().unwrap().url,
            "https://cdn.example.com/tee.jpg"
        );
    }

    #[test]
    fn test_variant_image_preferred() {
        let mut server = shopify_cart();
        server.lines[0].merchandise.image = Some(ShopifyImage {
            url: "https://cdn.example.com/tee-large.jpg".to_string(),
            alt_text: Some("Large tee".to_string()),
            width: Some(800),
            height: Some(800),
        });

        let cart = Cart::from(&server);
        let image = cart.lines[0].merchandise.product.featured_image.clone().unwrap();
        assert_eq!(image.url, "https://cdn.example.com/tee-large.jpg");
        assert_eq!(image.width, Some(800));
    }

    #[test]
    fn test_extra_payload_fields_ignored() {
        let mut payload = serde_json::to_value(shopify_cart()).unwrap();
        payload["note"] = json!("Gift wrap please");
        payload["attributes"] = json!([{"key": "source", "value": "quiz"}]);
        payload["lines"][0]["merchandise"]["sku"] = json!("TEE-L");

        let server: ShopifyCart = serde_json::from_value(payload).unwrap();
        assert_eq!(Cart::from(&server), Cart::from(&shopify_cart()));
    }

    #[test]
    fn test_server_tax_is_kept() {
        let mut server = shopify_cart();
        server.cost.total_tax = Some(Money::new("2.16", "USD"));
        let cart = Cart::from(&server);
        assert_eq!(cart.cost.total_tax_amount.amount, "2.16");
    }
}
